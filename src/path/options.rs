use serde::{Deserialize, Serialize};

use crate::path::join::join_with;
use crate::path::separator::{PathStyle, Separator};
use crate::path::split::split_with;

/// Separator configuration a caller can embed in its own settings.
///
/// An explicit `separator` wins over `style`; with neither set the host
/// separator is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PathStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,
}

impl PathOptions {
    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn separator(&self) -> Separator {
        match (self.separator, self.style) {
            (Some(separator), style) => {
                if let Some(style) = style.filter(|style| style.separator() != separator) {
                    log::warn!(
                        "explicit path separator {separator:?} overrides {style} style separator"
                    );
                }
                separator
            }
            (None, Some(style)) => style.separator(),
            (None, None) => {
                log::debug!("no path separator configured, using host separator");
                Separator::host()
            }
        }
    }

    pub fn split(&self, input: &str) -> Vec<String> {
        split_with(input, self.separator())
    }

    pub fn join<I, S>(&self, segments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join_with(segments, self.separator())
    }
}
