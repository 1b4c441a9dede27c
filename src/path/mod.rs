//! Splitting path strings into segments and joining them back.
//!
//! The functions here treat a path as plain text cut at one separator
//! character. They do not normalize `.`/`..`, touch the filesystem or
//! translate between separator conventions. [`split`] and [`join`] are exact
//! inverses: `join(split(s)) == s` for every string, and
//! `split(join(segments)) == segments` whenever no segment contains the
//! separator.

mod constants;
mod error;
mod join;
mod options;
mod separator;
mod split;

#[doc(inline)]
pub use constants::{OS_PATH_SEPARATOR, POSIX_SEPARATOR, WINDOWS_SEPARATOR};

#[doc(inline)]
pub use error::{invalid_separator, invalid_style, PathError, PathErrorCode, PathResult};

#[doc(inline)]
pub use join::{join, join_with};

#[doc(inline)]
pub use options::PathOptions;

#[doc(inline)]
pub use separator::{PathStyle, Separator};

#[doc(inline)]
pub use split::{segments, split, split_with};
