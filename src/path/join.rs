use crate::path::separator::Separator;

/// Concatenates `segments`, placing the host path separator strictly between
/// neighbours.
///
/// This is the inverse of [`split`](crate::path::split): empty segments
/// still get separators on both sides, so `join(split(s)) == s` holds for any
/// string, including ones with leading or trailing separators.
///
/// ```rust
/// # use sys_path::path::{join, OS_PATH_SEPARATOR};
/// let joined = join(["", "usr", "lib"]);
/// assert_eq!(joined, format!("{0}usr{0}lib", OS_PATH_SEPARATOR));
/// assert_eq!(join(Vec::<String>::new()), "");
/// ```
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_with(segments, Separator::host())
}

/// Same as [`join`], with an explicit separator.
pub fn join_with<I, S>(segments: I, separator: Separator) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    // Position decides where separators go; an empty first segment must
    // still be followed by one.
    for (index, segment) in segments.into_iter().enumerate() {
        if index > 0 {
            result.push(separator.as_char());
        }
        result.push_str(segment.as_ref());
    }
    result
}
