//! # dccpath
//!
//! Locate installed executables of digital-content-creation tools
//! (Blender, Autodesk Maya, Autodesk MotionBuilder).
//!
//! Each lookup takes a version string and probes, in a fixed order, the
//! places the vendor installs to on the current platform: environment
//! variables, default install directories, the Windows registry and the
//! executable search path. The first existing candidate wins.
//!
//! Lookups read a [`Host`], a snapshot of platform identity, environment
//! variables and registry. [`Host::current`] describes the running machine;
//! [`Host::new`] builds any other one, which is how the tests exercise the
//! Windows and macOS branches on Linux.
//!
//! ## Features
//!
//! - [`find_blender`], [`find_maya`], [`find_mayapy`], [`find_mobu`],
//!   [`find_mobupy`] for each executable
//! - [`maya_install_dir`] and [`mobu_install_dir`] for the install roots
//! - [`locate`] and [`locate_all`] to dispatch on [`Dcc`] and [`Variant`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use dccpath::{find_mayapy, locate_all, Host};
//!
//! let host = Host::current();
//!
//! match find_mayapy(&host, "2025") {
//!     Ok(path) => println!("mayapy 2025 at {}", path.display()),
//!     Err(e) => eprintln!("{e}"),
//! }
//!
//! for ((dcc, variant), result) in locate_all(&host, "2025") {
//!     println!("{dcc} {variant}: {:?}", result.ok());
//! }
//! ```

mod blender;
mod dcc;
mod error;
mod host;
mod maya;
mod mobu;
mod options;
mod platform;
mod probe;
mod registry;

pub use blender::{blender_version, find_blender};
pub use dcc::{Dcc, Variant};
pub use error::ResolveError;
pub use host::Host;
pub use maya::{
    find_maya, find_maya_executable, find_mayapy, maya_executable_name, maya_install_dir,
};
pub use mobu::{find_mobu, find_mobu_executable, find_mobupy, mobu_install_dir, MobuLayout};
pub use options::{
    ResolveOptions, DEFAULT_AUTODESK_ROOT, DEFAULT_HOMEBREW_BLENDER, DEFAULT_MAYA_LOCATION_VAR,
    DEFAULT_VERSION_TIMEOUT,
};
pub use platform::Platform;
#[cfg(windows)]
pub use registry::WindowsRegistry;
pub use registry::{system_registry, NoRegistry, Registry, StaticRegistry};

use std::collections::HashMap;
use std::path::PathBuf;

/// Locate one executable of `dcc` for `version`.
///
/// Dispatches to the per-application lookup. Asking Blender for
/// [`Variant::Interpreter`] fails with [`ResolveError::UnsupportedVariant`].
///
/// ```rust
/// use dccpath::{locate, Dcc, Host, Platform, Variant};
///
/// let host = Host::new(Platform::Linux);
/// let err = locate(&host, Dcc::Blender, "4.2", Variant::Interpreter).unwrap_err();
/// assert!(err.is_unsupported());
/// ```
pub fn locate(
    host: &Host,
    dcc: Dcc,
    version: &str,
    variant: Variant,
) -> Result<PathBuf, ResolveError> {
    match dcc {
        Dcc::Blender => match variant {
            Variant::Main => find_blender(host, version),
            Variant::Interpreter => Err(ResolveError::UnsupportedVariant { dcc, variant }),
        },
        Dcc::Maya => find_maya_executable(host, version, variant),
        Dcc::MotionBuilder => find_mobu_executable(host, version, variant),
    }
}

/// Locate every executable of every known application for `version`.
///
/// Only the variants an application ships are included (see
/// [`Dcc::variants`]).
pub fn locate_all(
    host: &Host,
    version: &str,
) -> HashMap<(Dcc, Variant), Result<PathBuf, ResolveError>> {
    Dcc::all()
        .flat_map(|dcc| dcc.variants().iter().map(move |&variant| (dcc, variant)))
        .map(|(dcc, variant)| ((dcc, variant), locate(host, dcc, version, variant)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_all_keys() {
        let all = locate_all(&Host::new(Platform::Linux), "2025");
        assert_eq!(all.len(), 5);
        assert!(all.contains_key(&(Dcc::Blender, Variant::Main)));
        assert!(!all.contains_key(&(Dcc::Blender, Variant::Interpreter)));
        assert!(all.contains_key(&(Dcc::Maya, Variant::Interpreter)));
        assert!(all.contains_key(&(Dcc::MotionBuilder, Variant::Main)));
    }

    #[test]
    fn test_locate_all_on_empty_host() {
        let all = locate_all(&Host::new(Platform::Other("freebsd")), "2025");
        for ((dcc, _), result) in &all {
            let err = result.as_ref().unwrap_err();
            match dcc {
                Dcc::MotionBuilder => assert!(err.is_unsupported()),
                _ => assert!(err.is_not_found()),
            }
        }
    }

    #[test]
    fn test_locate_blender_interpreter_unsupported() {
        let host = Host::new(Platform::Windows);
        let err = locate(&host, Dcc::Blender, "4.2", Variant::Interpreter).unwrap_err();
        assert_eq!(err.to_string(), "Blender has no interpreter");
    }
}
