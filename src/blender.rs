//! Blender executable lookup.
//!
//! Probe order, first hit wins:
//!
//! 1. `blender` on the search path, if its path mentions the requested version
//! 2. Homebrew's `/opt/homebrew/bin/blender` on macOS (any version)
//! 3. `%PROGRAMFILES%\Blender Foundation\Blender <version>\blender.exe` on Windows
//!
//! # Known limitation
//!
//! The search-path probe matches the version as plain text inside the path.
//! Requesting `"2"` accepts a binary under `blender-4.2/`, and a binary
//! whose path never names its version is rejected unless
//! [`ResolveOptions::verify_blender_version`](crate::ResolveOptions) is set.

use crate::probe::{existing_file, find_on_search_path, parse_version, query_version};
use crate::{Dcc, Host, Platform, ResolveError, Variant};
use semver::Version;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const BLENDER_STEM: &str = "blender";

/// Get the path to the Blender executable for `version`.
///
/// # Example
///
/// ```rust,no_run
/// use dccpath::{find_blender, Host};
///
/// match find_blender(&Host::current(), "4.2") {
///     Ok(path) => println!("Blender 4.2 at {}", path.display()),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub fn find_blender(host: &Host, version: &str) -> Result<PathBuf, ResolveError> {
    let exe_name = host.platform().executable_name(BLENDER_STEM);

    let found = search_path_blender(host, version, &exe_name)
        .or_else(|| homebrew_blender(host))
        .or_else(|| program_files_blender(host, version, &exe_name));

    match found {
        Some(path) => {
            debug!(dcc = %Dcc::Blender, version, path = %path.display(), "located executable");
            Ok(path)
        }
        None => Err(ResolveError::not_found(
            Dcc::Blender,
            version,
            Variant::Main,
            None,
        )),
    }
}

/// Ask a Blender executable for its version (`blender --version`).
///
/// The process is killed if it runs longer than `timeout`. Returns `None`,
/// after logging why, if the executable cannot be run, exits with an error,
/// times out or prints no recognisable version.
pub fn blender_version(path: &Path, timeout: Duration) -> Option<Version> {
    let output = match query_version(path, timeout) {
        Ok(output) => output,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "blender --version failed");
            return None;
        }
    };

    let version = parse_version(&output);
    if version.is_none() {
        debug!(path = %path.display(), output = output.trim(), "no version in blender output");
    }
    version
}

fn search_path_blender(host: &Host, version: &str, exe_name: &str) -> Option<PathBuf> {
    let path = existing_file(find_on_search_path(host, exe_name)?)?;

    if path.to_string_lossy().contains(version) {
        return Some(path);
    }

    if host.options().verify_blender_version {
        if let Some(found) = blender_version(&path, host.options().version_timeout) {
            if version_matches(&found, version) {
                return Some(path);
            }
            debug!(path = %path.display(), %found, requested = version, "search-path blender version differs");
            return None;
        }
    }

    debug!(path = %path.display(), requested = version, "search-path blender does not mention version");
    None
}

fn homebrew_blender(host: &Host) -> Option<PathBuf> {
    if host.platform() != Platform::MacOs {
        return None;
    }
    existing_file(host.options().homebrew_blender.clone())
}

fn program_files_blender(host: &Host, version: &str, exe_name: &str) -> Option<PathBuf> {
    if !host.platform().is_windows() {
        return None;
    }
    let program_files = host.var("PROGRAMFILES")?;

    existing_file(
        PathBuf::from(program_files)
            .join("Blender Foundation")
            .join(format!("Blender {version}"))
            .join(exe_name),
    )
}

/// `true` if `requested` is the full version or its `major.minor` prefix.
fn version_matches(found: &Version, requested: &str) -> bool {
    requested == found.to_string() || requested == format!("{}.{}", found.major, found.minor)
}
