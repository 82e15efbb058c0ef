//! Operating system identity used to branch probe order and naming.

use serde::Serialize;
use std::fmt;

/// The operating system a lookup runs against.
///
/// Read once via [`Platform::current`] or injected through
/// [`Host::new`](crate::Host::new) so every platform branch can be exercised
/// from any machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Linux.
    Linux,
    /// Apple macOS.
    MacOs,
    /// Any other OS, carrying its `std::env::consts::OS` name.
    Other(&'static str),
}

impl Platform {
    /// The platform this process was compiled for.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name to a platform.
    pub fn from_os_name(name: &'static str) -> Self {
        match name {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            other => Self::Other(other),
        }
    }

    /// Append the platform's executable suffix to `stem`.
    ///
    /// ```rust
    /// use dccpath::Platform;
    ///
    /// assert_eq!(Platform::Windows.executable_name("maya"), "maya.exe");
    /// assert_eq!(Platform::Linux.executable_name("maya"), "maya");
    /// ```
    pub fn executable_name(&self, stem: &str) -> String {
        match self {
            Self::Windows => format!("{stem}.exe"),
            _ => stem.to_string(),
        }
    }

    /// `true` for [`Platform::Windows`].
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("Windows"),
            Self::Linux => f.write_str("Linux"),
            Self::MacOs => f.write_str("macOS"),
            Self::Other(name) => f.write_str(name),
        }
    }
}
