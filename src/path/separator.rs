use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::constants::{OS_PATH_SEPARATOR, POSIX_SEPARATOR, WINDOWS_SEPARATOR};
use crate::path::error::{invalid_separator, invalid_style, PathError, PathResult};

/// A path separator, guaranteed to be a single ASCII byte.
///
/// Most callers never construct one and use [`split`](crate::path::split) /
/// [`join`](crate::path::join), which operate on [`OS_PATH_SEPARATOR`]. A
/// `Separator` is needed when handling paths that belong to a platform other
/// than the host, e.g. Windows paths recorded on a Linux build machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Separator(char);

impl Separator {
    pub fn new(value: char) -> PathResult<Self> {
        if value.is_ascii() {
            Ok(Self(value))
        } else {
            Err(invalid_separator(value.encode_utf8(&mut [0; 4])))
        }
    }

    pub const fn host() -> Self {
        Self(OS_PATH_SEPARATOR)
    }

    pub const fn posix() -> Self {
        Self(POSIX_SEPARATOR)
    }

    pub const fn windows() -> Self {
        Self(WINDOWS_SEPARATOR)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Separator {
    type Error = PathError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Separator {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(value), None) => Self::new(value).map_err(|_| invalid_separator(s)),
            _ => Err(invalid_separator(s)),
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Separator> for String {
    fn from(value: Separator) -> Self {
        value.0.to_string()
    }
}

impl From<Separator> for char {
    fn from(value: Separator) -> Self {
        value.0
    }
}

/// Separator conventions of the platforms paths are commonly exchanged between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    Posix,
    Windows,
}

impl PathStyle {
    #[cfg(windows)]
    pub const fn host() -> Self {
        PathStyle::Windows
    }

    #[cfg(not(windows))]
    pub const fn host() -> Self {
        PathStyle::Posix
    }

    pub const fn separator(self) -> Separator {
        match self {
            PathStyle::Posix => Separator::posix(),
            PathStyle::Windows => Separator::windows(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathStyle::Posix => "posix",
            PathStyle::Windows => "windows",
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathStyle {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(PathStyle::Posix),
            "windows" | "win" => Ok(PathStyle::Windows),
            _ => Err(invalid_style(s)),
        }
    }
}
