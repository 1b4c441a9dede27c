/// Separator used by POSIX-like systems.
pub const POSIX_SEPARATOR: char = '/';

/// Separator used by Windows.
pub const WINDOWS_SEPARATOR: char = '\\';

/// Path separator of the platform this crate was compiled for.
#[cfg(windows)]
pub const OS_PATH_SEPARATOR: char = WINDOWS_SEPARATOR;

/// Path separator of the platform this crate was compiled for.
#[cfg(not(windows))]
pub const OS_PATH_SEPARATOR: char = POSIX_SEPARATOR;
