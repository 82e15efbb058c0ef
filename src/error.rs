//! Error types for executable lookups.

use crate::{Dcc, Platform, Variant};
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the executable resolvers.
///
/// [`ResolveError::NotFound`] is the caller-visible "not installed" signal and
/// may chain the lowest-level cause through [`std::error::Error::source`].
/// [`ResolveError::UnsupportedPlatform`] means the lookup can never succeed
/// on this OS and is never wrapped.
///
/// # Example
///
/// ```rust
/// use dccpath::{find_mobu, Host, Platform};
///
/// let host = Host::new(Platform::MacOs);
/// match find_mobu(&host, "2025") {
///     Ok(path) => println!("MotionBuilder at {}", path.display()),
///     Err(e) if e.is_unsupported() => println!("not available here: {e}"),
///     Err(e) => println!("not installed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// No executable for the requested version was located.
    #[error("failed to locate {dcc} {version} {variant}")]
    NotFound {
        dcc: Dcc,
        version: String,
        variant: Variant,
        /// Lowest-level reason, when one is known.
        #[source]
        source: Option<Box<ResolveError>>,
    },

    /// No install directory candidate exists for the requested version.
    #[error("unable to locate {dcc} {version} installation directory")]
    InstallDirNotFound { dcc: Dcc, version: String },

    /// The install directory exists but the expected executable does not.
    #[error("expected executable at {}, file does not exist", path.display())]
    MissingExecutable { path: PathBuf },

    /// The application has no install convention on this platform.
    #[error("platform {platform} not supported by {dcc}")]
    UnsupportedPlatform { dcc: Dcc, platform: Platform },

    /// The application does not ship the requested executable variant.
    #[error("{dcc} has no {variant}")]
    UnsupportedVariant { dcc: Dcc, variant: Variant },
}

impl ResolveError {
    pub(crate) fn not_found(
        dcc: Dcc,
        version: &str,
        variant: Variant,
        cause: Option<ResolveError>,
    ) -> Self {
        Self::NotFound {
            dcc,
            version: version.to_string(),
            variant,
            source: cause.map(Box::new),
        }
    }

    /// `true` when the tool is simply not installed (yet).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InstallDirNotFound { .. } | Self::MissingExecutable { .. }
        )
    }

    /// `true` when the lookup can never succeed on this machine.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedPlatform { .. } | Self::UnsupportedVariant { .. }
        )
    }
}
