use std::str::Split;

use crate::path::separator::Separator;

/// Cuts `input` at every occurrence of the host path separator.
///
/// Every separator produces a cut, so a path with `k` separators always
/// yields `k + 1` segments. Leading, trailing and doubled separators show up
/// as empty segments, which is what lets [`join`](crate::path::join) rebuild
/// the exact input.
///
/// ```rust
/// # use sys_path::path::{split, OS_PATH_SEPARATOR};
/// let input = format!("usr{0}lib{0}{0}libc.so", OS_PATH_SEPARATOR);
/// assert_eq!(split(&input), ["usr", "lib", "", "libc.so"]);
/// assert_eq!(split(""), [""]);
/// ```
pub fn split(input: &str) -> Vec<String> {
    split_with(input, Separator::host())
}

/// Same as [`split`], with an explicit separator.
pub fn split_with(input: &str, separator: Separator) -> Vec<String> {
    segments(input, separator).map(str::to_owned).collect()
}

/// Borrowed, lazy form of [`split_with`].
pub fn segments(input: &str, separator: Separator) -> Split<'_, char> {
    input.split(separator.as_char())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posix(input: &str) -> Vec<String> {
        split_with(input, Separator::posix())
    }

    #[test]
    fn splits_on_every_separator() {
        for (input, expected) in [
            ("", vec![""]),
            ("/", vec!["", ""]),
            ("//", vec!["", "", ""]),
            ("a", vec!["a"]),
            ("a/b/c", vec!["a", "b", "c"]),
            ("a//b", vec!["a", "", "b"]),
            ("/usr/bin", vec!["", "usr", "bin"]),
            ("src/", vec!["src", ""]),
            ("./a/../b", vec![".", "a", "..", "b"]),
        ] {
            assert_eq!(posix(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn segment_count_is_separator_count_plus_one() {
        for input in ["", "/", "a/b", "//a///b/", "no-separator", "x/y/z/"] {
            let separators = input.matches('/').count();
            assert_eq!(posix(input).len(), separators + 1, "input {input:?}");
        }
    }

    #[test]
    fn other_separators_are_plain_characters() {
        assert_eq!(posix("C:\\Users\\me"), ["C:\\Users\\me"]);
        assert_eq!(
            split_with("C:\\Users\\me", Separator::windows()),
            ["C:", "Users", "me"]
        );
    }

    #[test]
    fn non_ascii_segments_are_preserved() {
        assert_eq!(posix("héllo/wörld/日本"), ["héllo", "wörld", "日本"]);
    }

    #[test]
    fn segments_borrow_from_input() {
        let input = String::from("a/b");
        let borrowed: Vec<&str> = segments(&input, Separator::posix()).collect();
        assert_eq!(borrowed, ["a", "b"]);
    }

    #[test]
    fn host_split_uses_host_separator() {
        let sep = Separator::host();
        let input = format!("a{sep}b");
        assert_eq!(split(&input), ["a", "b"]);
    }
}
