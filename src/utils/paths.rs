//! Path expansion for command-line arguments.
//!
//! Paths supplied through environment variables (`MDMETA_OUTPUT`) or quoted
//! arguments reach the program without shell expansion, so a leading `~` is
//! expanded here. Everything else, `$` included, is taken literally: a file
//! named `price$1.md` is a valid input.

use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the home directory.
///
/// Paths without one are returned unchanged, and so is `~` itself when the
/// home directory cannot be determined.
///
/// # Examples
///
/// ```rust
/// use mdmeta_cli::utils::paths::expand_path;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_path("docs/intro.md"), PathBuf::from("docs/intro.md"));
/// assert_eq!(expand_path("notes/$HOME.md"), PathBuf::from("notes/$HOME.md"));
/// ```
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
