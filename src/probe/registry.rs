//! Registry lookups that treat every failure as absence.

use crate::Host;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Read an install-location value from the host registry.
///
/// A missing key or value, or a host without a registry, is an expected
/// outcome and logged at debug. Any other failure (access denied, wrong value
/// type) is logged at warn. Both yield `None`; the caller moves on to its next
/// candidate.
pub(crate) fn registry_path(host: &Host, key: &str, value: &str) -> Option<PathBuf> {
    match host.registry().read_string(key, value) {
        Ok(data) => Some(PathBuf::from(data)),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::Unsupported) => {
            debug!(key, value, error = %e, "registry value not available");
            None
        }
        Err(e) => {
            warn!(key, value, error = %e, "failed to read registry value");
            None
        }
    }
}
