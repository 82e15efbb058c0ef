//! Resolver options configuration.
//!
//! This module provides the [`ResolveOptions`] struct for configuring the
//! fixed locations the resolvers probe and the opt-in Blender version check.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default Linux root for Autodesk products.
pub const DEFAULT_AUTODESK_ROOT: &str = "/usr/autodesk";

/// Homebrew's Apple Silicon Blender location.
pub const DEFAULT_HOMEBREW_BLENDER: &str = "/opt/homebrew/bin/blender";

/// Default limit for running `blender --version`.
pub const DEFAULT_VERSION_TIMEOUT: Duration = Duration::from_secs(2);

/// Environment variable Maya uses to advertise its install location.
pub const DEFAULT_MAYA_LOCATION_VAR: &str = "MAYA_LOCATION";

/// Configuration options for resolving DCC executables.
///
/// The defaults match the vendors' documented install locations. Overriding
/// them is mostly useful for tests and for studios that relocate installs.
///
/// # Example
///
/// ```rust
/// use dccpath::ResolveOptions;
///
/// // Default locations, path-text version matching only
/// let opts = ResolveOptions::default();
///
/// // Ask the search-path Blender for its version when the path is ambiguous
/// let opts = ResolveOptions {
///     verify_blender_version: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Root holding `maya<version>` and `MotionBuilder<version>` on Linux.
    ///
    /// Default: `/usr/autodesk`
    pub autodesk_root: PathBuf,

    /// Blender binary installed by Homebrew on macOS.
    ///
    /// Default: `/opt/homebrew/bin/blender`
    pub homebrew_blender: PathBuf,

    /// Name of the variable holding the Maya install directory.
    ///
    /// Default: `MAYA_LOCATION`
    pub maya_location_var: String,

    /// Run `blender --version` on a search-path Blender whose path does not
    /// mention the requested version.
    ///
    /// Default: `false` (only the path text is matched)
    pub verify_blender_version: bool,

    /// How long `blender --version` may run before it is killed.
    ///
    /// A Blender that does not answer in time is treated as not matching.
    ///
    /// Default: 2 seconds
    pub version_timeout: Duration,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            autodesk_root: PathBuf::from(DEFAULT_AUTODESK_ROOT),
            homebrew_blender: PathBuf::from(DEFAULT_HOMEBREW_BLENDER),
            maya_location_var: DEFAULT_MAYA_LOCATION_VAR.to_string(),
            verify_blender_version: false,
            version_timeout: DEFAULT_VERSION_TIMEOUT,
        }
    }
}
