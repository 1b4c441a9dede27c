//! Path segment utilities for build tooling.
//!
//! See [`path`] for splitting a path string into its segments and joining
//! segments back, either with the host separator or one chosen at runtime.

pub mod path;
