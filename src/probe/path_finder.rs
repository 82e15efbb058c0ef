//! Search-path lookup and existence checks.

use crate::Host;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find an executable by name on the host's search path.
///
/// Uses the `which` crate against the host's `PATH` value rather than the
/// process environment, so an injected host is honoured.
///
/// # Returns
///
/// `Some(PathBuf)` if the executable is found, `None` if `PATH` is unset or
/// no entry holds a matching executable.
pub(crate) fn find_on_search_path(host: &Host, name: &str) -> Option<PathBuf> {
    let paths = host.search_path()?;

    match which::which_in(name, Some(paths), Path::new(".")) {
        Ok(path) => Some(path),
        Err(e) => {
            debug!(executable = name, error = %e, "executable not on search path");
            None
        }
    }
}

/// `Some(path)` if `path` is an existing regular file.
pub(crate) fn existing_file(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        debug!(path = %path.display(), "no such file");
        None
    }
}

/// `Some(path)` if `path` is an existing directory.
pub(crate) fn existing_dir(path: PathBuf) -> Option<PathBuf> {
    if path.is_dir() {
        Some(path)
    } else {
        debug!(path = %path.display(), "no such directory");
        None
    }
}
