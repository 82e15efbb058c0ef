//! Autodesk Maya executable lookup.

use crate::probe::{existing_dir, existing_file, registry_path};
use crate::{Dcc, Host, Platform, ResolveError, Variant};
use std::path::PathBuf;
use tracing::debug;

/// Registry value holding the install directory under the versioned key.
const REGISTRY_VALUE: &str = "MAYA_INSTALL_LOCATION";

fn registry_key(version: &str) -> String {
    format!(r"SOFTWARE\Autodesk\Maya\{version}\Setup\InstallPath")
}

/// Executable name for `variant` on `platform` (`maya`, `mayapy.exe`, ...).
pub fn maya_executable_name(platform: Platform, variant: Variant) -> String {
    match variant {
        Variant::Main => platform.executable_name("maya"),
        Variant::Interpreter => platform.executable_name("mayapy"),
    }
}

/// Get the Maya install directory for `version`.
///
/// Checked in order:
///
/// 1. The `MAYA_LOCATION` variable, only if its value contains `version`
/// 2. On Windows, `MAYA_INSTALL_LOCATION` under
///    `HKLM\SOFTWARE\Autodesk\Maya\<version>\Setup\InstallPath`
/// 3. On Linux, `/usr/autodesk/maya<version>`
///
/// Each candidate must be an existing directory.
pub fn maya_install_dir(host: &Host, version: &str) -> Option<PathBuf> {
    let dir = location_var_dir(host, version)
        .or_else(|| registry_dir(host, version))
        .or_else(|| default_dir(host, version))?;

    debug!(dcc = %Dcc::Maya, version, path = %dir.display(), "located install dir");
    Some(dir)
}

/// Get the path to a Maya executable for `version`.
///
/// See [`maya_install_dir`] for the directories searched. The executable is
/// expected at `<install dir>/bin/<name>`.
pub fn find_maya_executable(
    host: &Host,
    version: &str,
    variant: Variant,
) -> Result<PathBuf, ResolveError> {
    let Some(install_dir) = maya_install_dir(host, version) else {
        return Err(ResolveError::not_found(
            Dcc::Maya,
            version,
            variant,
            Some(ResolveError::InstallDirNotFound {
                dcc: Dcc::Maya,
                version: version.to_string(),
            }),
        ));
    };

    let exe = install_dir
        .join("bin")
        .join(maya_executable_name(host.platform(), variant));

    existing_file(exe.clone()).ok_or_else(|| {
        ResolveError::not_found(
            Dcc::Maya,
            version,
            variant,
            Some(ResolveError::MissingExecutable { path: exe }),
        )
    })
}

/// Get the path to the `maya` executable for `version`.
///
/// # Example
///
/// ```rust,no_run
/// use dccpath::{find_maya, Host};
///
/// let maya = find_maya(&Host::current(), "2025")?;
/// println!("{}", maya.display());
/// # Ok::<(), dccpath::ResolveError>(())
/// ```
pub fn find_maya(host: &Host, version: &str) -> Result<PathBuf, ResolveError> {
    find_maya_executable(host, version, Variant::Main)
}

/// Get the path to the `mayapy` interpreter for `version`.
pub fn find_mayapy(host: &Host, version: &str) -> Result<PathBuf, ResolveError> {
    find_maya_executable(host, version, Variant::Interpreter)
}

fn location_var_dir(host: &Host, version: &str) -> Option<PathBuf> {
    let var = &host.options().maya_location_var;
    let location = host.var(var)?;

    if !location.contains(version) {
        debug!(var = %var, value = %location, requested = version, "install variable names another version");
        return None;
    }
    existing_dir(PathBuf::from(location))
}

fn registry_dir(host: &Host, version: &str) -> Option<PathBuf> {
    if !host.platform().is_windows() {
        return None;
    }
    existing_dir(registry_path(host, &registry_key(version), REGISTRY_VALUE)?)
}

fn default_dir(host: &Host, version: &str) -> Option<PathBuf> {
    if host.platform() != Platform::Linux {
        return None;
    }
    existing_dir(host.options().autodesk_root.join(format!("maya{version}")))
}
