//! Read-only access to a vendor-scoped key/value store.
//!
//! On Windows this is `HKEY_LOCAL_MACHINE`; everywhere else the resolvers get
//! [`NoRegistry`]. [`StaticRegistry`] is an in-memory store for tests and for
//! callers that want to pin lookups.

use std::collections::HashMap;
use std::io;

/// Lookup of a string value under a registry key.
///
/// Implementations report a missing key or value as
/// [`io::ErrorKind::NotFound`]. Any other error is an access failure.
pub trait Registry: Send + Sync {
    /// Read the string `value` stored under `key`.
    fn read_string(&self, key: &str, value: &str) -> io::Result<String>;
}

/// Registry stub for platforms without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegistry;

impl Registry for NoRegistry {
    fn read_string(&self, _key: &str, _value: &str) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no registry on this platform",
        ))
    }
}

/// `HKEY_LOCAL_MACHINE` backed by winreg.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsRegistry;

#[cfg(windows)]
impl Registry for WindowsRegistry {
    fn read_string(&self, key: &str, value: &str) -> io::Result<String> {
        use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};
        use winreg::RegKey;

        RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey_with_flags(key, KEY_READ)?
            .get_value::<String, _>(value)
    }
}

/// The registry of the machine this process runs on.
#[cfg(windows)]
pub fn system_registry() -> Box<dyn Registry> {
    Box::new(WindowsRegistry)
}

/// The registry of the machine this process runs on.
#[cfg(not(windows))]
pub fn system_registry() -> Box<dyn Registry> {
    Box::new(NoRegistry)
}

/// In-memory registry.
///
/// Keys are matched case-insensitively, as on Windows.
///
/// ```rust
/// use dccpath::{Registry, StaticRegistry};
///
/// let reg = StaticRegistry::new().with_value(
///     r"SOFTWARE\Autodesk\MotionBuilder\2025",
///     "InstallPath",
///     r"D:\Autodesk\MotionBuilder 2025",
/// );
/// let path = reg
///     .read_string(r"SOFTWARE\AUTODESK\MOTIONBUILDER\2025", "InstallPath")
///     .unwrap();
/// assert_eq!(path, r"D:\Autodesk\MotionBuilder 2025");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: HashMap<(String, String), String>,
}

impl StaticRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` as the string `value` under `key`.
    pub fn with_value(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
        data: impl Into<String>,
    ) -> Self {
        self.entries
            .insert(Self::entry(key.as_ref(), value.as_ref()), data.into());
        self
    }

    fn entry(key: &str, value: &str) -> (String, String) {
        (key.to_ascii_lowercase(), value.to_ascii_lowercase())
    }
}

impl Registry for StaticRegistry {
    fn read_string(&self, key: &str, value: &str) -> io::Result<String> {
        self.entries
            .get(&Self::entry(key, value))
            .cloned()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("registry value {key}\\{value} not found"),
                )
            })
    }
}
