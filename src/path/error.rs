use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathErrorCode {
    InvalidSeparator,
    InvalidStyle,
}

impl PathErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathErrorCode::InvalidSeparator => "path/invalid-separator",
            PathErrorCode::InvalidStyle => "path/invalid-style",
        }
    }
}

#[derive(Clone, Debug)]
pub struct PathError {
    pub code: PathErrorCode,
    message: String,
}

impl PathError {
    pub fn new(code: PathErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl Error for PathError {}

pub type PathResult<T> = Result<T, PathError>;

pub fn invalid_separator(value: &str) -> PathError {
    PathError::new(
        PathErrorCode::InvalidSeparator,
        format!("Path separator must be a single ASCII character, got {value:?}"),
    )
}

pub fn invalid_style(value: &str) -> PathError {
    PathError::new(
        PathErrorCode::InvalidStyle,
        format!("Unknown path style \"{value}\"; expected \"posix\" or \"windows\""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code() {
        let err = invalid_separator("ab");
        assert_eq!(err.code_str(), "path/invalid-separator");
        assert_eq!(
            err.to_string(),
            "Path separator must be a single ASCII character, got \"ab\" (path/invalid-separator)"
        );
    }

    #[test]
    fn style_error_carries_value() {
        let err = invalid_style("amiga");
        assert_eq!(err.code, PathErrorCode::InvalidStyle);
        assert!(err.message().contains("amiga"));
    }
}
