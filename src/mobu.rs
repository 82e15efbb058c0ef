//! Autodesk MotionBuilder executable lookup.
//!
//! MotionBuilder ships for Windows and Linux only. On any other platform the
//! executable lookups fail with [`ResolveError::UnsupportedPlatform`] rather
//! than reporting "not found".

use crate::probe::{existing_dir, existing_file, registry_path};
use crate::{Dcc, Host, Platform, ResolveError, Variant};
use std::path::PathBuf;
use tracing::debug;

/// Registry value holding the install directory under the versioned key.
const REGISTRY_VALUE: &str = "InstallPath";

fn registry_key(version: &str) -> String {
    format!(r"SOFTWARE\Autodesk\MotionBuilder\{version}")
}

/// Where the binaries live inside a MotionBuilder install, per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobuLayout {
    /// Path components of the binary directory below the install dir.
    pub bin_dir: &'static [&'static str],
    /// File name of the MotionBuilder application.
    pub main: &'static str,
    /// File name of the `mobupy` interpreter.
    pub interpreter: &'static str,
}

impl MobuLayout {
    /// Layout for `platform`, or `UnsupportedPlatform`.
    pub fn for_platform(platform: Platform) -> Result<Self, ResolveError> {
        match platform {
            Platform::Windows => Ok(Self {
                bin_dir: &["bin", "x64"],
                main: "motionbuilder.exe",
                interpreter: "mobupy.exe",
            }),
            Platform::Linux => Ok(Self {
                bin_dir: &["bin", "linux_64"],
                main: "motionbuilder",
                interpreter: "mobupy",
            }),
            other => Err(ResolveError::UnsupportedPlatform {
                dcc: Dcc::MotionBuilder,
                platform: other,
            }),
        }
    }

    /// File name of the executable for `variant`.
    pub fn executable_name(&self, variant: Variant) -> &'static str {
        match variant {
            Variant::Main => self.main,
            Variant::Interpreter => self.interpreter,
        }
    }

    /// `<install_dir>/<bin dir>/<executable>` for `variant`.
    pub fn executable_path(&self, install_dir: PathBuf, variant: Variant) -> PathBuf {
        let mut path = install_dir;
        path.extend(self.bin_dir);
        path.push(self.executable_name(variant));
        path
    }
}

/// Get the MotionBuilder install directory for `version`.
///
/// - Linux: `/usr/autodesk/MotionBuilder<version>`
/// - Windows: `%PROGRAMFILES%\Autodesk\MotionBuilder <version>` when its
///   `bin\x64` directory exists, then `InstallPath` under
///   `HKLM\SOFTWARE\Autodesk\MotionBuilder\<version>`
///
/// Returns `None` on every other platform.
pub fn mobu_install_dir(host: &Host, version: &str) -> Option<PathBuf> {
    let dir = match host.platform() {
        Platform::Linux => existing_dir(
            host.options()
                .autodesk_root
                .join(format!("MotionBuilder{version}")),
        ),
        Platform::Windows => program_files_dir(host, version).or_else(|| {
            existing_dir(registry_path(host, &registry_key(version), REGISTRY_VALUE)?)
        }),
        other => {
            debug!(dcc = %Dcc::MotionBuilder, platform = %other, "no install convention on this platform");
            None
        }
    }?;

    debug!(dcc = %Dcc::MotionBuilder, version, path = %dir.display(), "located install dir");
    Some(dir)
}

/// Get the path to a MotionBuilder executable for `version`.
pub fn find_mobu_executable(
    host: &Host,
    version: &str,
    variant: Variant,
) -> Result<PathBuf, ResolveError> {
    let layout = MobuLayout::for_platform(host.platform())?;

    let Some(install_dir) = mobu_install_dir(host, version) else {
        return Err(ResolveError::not_found(
            Dcc::MotionBuilder,
            version,
            variant,
            Some(ResolveError::InstallDirNotFound {
                dcc: Dcc::MotionBuilder,
                version: version.to_string(),
            }),
        ));
    };

    let exe = layout.executable_path(install_dir, variant);
    existing_file(exe.clone()).ok_or_else(|| {
        ResolveError::not_found(
            Dcc::MotionBuilder,
            version,
            variant,
            Some(ResolveError::MissingExecutable { path: exe }),
        )
    })
}

/// Get the path to the `motionbuilder` executable for `version`.
pub fn find_mobu(host: &Host, version: &str) -> Result<PathBuf, ResolveError> {
    find_mobu_executable(host, version, Variant::Main)
}

/// Get the path to the `mobupy` interpreter for `version`.
pub fn find_mobupy(host: &Host, version: &str) -> Result<PathBuf, ResolveError> {
    find_mobu_executable(host, version, Variant::Interpreter)
}

fn program_files_dir(host: &Host, version: &str) -> Option<PathBuf> {
    let program_files = host.var("PROGRAMFILES")?;
    let install_dir = PathBuf::from(program_files)
        .join("Autodesk")
        .join(format!("MotionBuilder {version}"));

    existing_dir(install_dir.join("bin").join("x64"))?;
    Some(install_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ResolveOptions, StaticRegistry};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn install(dir: &Path, bin: &[&str], names: &[&str]) {
        let mut bin_dir = dir.to_path_buf();
        bin_dir.extend(bin);
        fs::create_dir_all(&bin_dir).unwrap();
        for name in names {
            fs::write(bin_dir.join(name), "").unwrap();
        }
    }

    #[test]
    fn test_layouts() {
        let windows = MobuLayout::for_platform(Platform::Windows).unwrap();
        assert_eq!(windows.bin_dir, &["bin", "x64"]);
        assert_eq!(windows.executable_name(Variant::Interpreter), "mobupy.exe");

        let linux = MobuLayout::for_platform(Platform::Linux).unwrap();
        assert_eq!(
            linux.executable_path(PathBuf::from("/mobu"), Variant::Main),
            PathBuf::from("/mobu/bin/linux_64/motionbuilder")
        );
    }

    #[test]
    fn test_unsupported_platform_is_distinct() {
        let err = find_mobu(&Host::new(Platform::MacOs), "2025").unwrap_err();
        assert!(err.is_unsupported());
        assert!(!err.is_not_found());
        assert!(matches!(
            err,
            ResolveError::UnsupportedPlatform {
                dcc: Dcc::MotionBuilder,
                platform: Platform::MacOs
            }
        ));
        assert!(mobu_install_dir(&Host::new(Platform::MacOs), "2025").is_none());
    }

    #[test]
    fn test_linux_default_dir() {
        let root = TempDir::new().unwrap();
        let mobu_dir = root.path().join("MotionBuilder2025");
        install(&mobu_dir, &["bin", "linux_64"], &["motionbuilder", "mobupy"]);

        let host = Host::new(Platform::Linux).with_options(ResolveOptions {
            autodesk_root: root.path().to_path_buf(),
            ..Default::default()
        });

        let main = find_mobu(&host, "2025").unwrap();
        let interpreter = find_mobupy(&host, "2025").unwrap();
        assert_eq!(main, mobu_dir.join("bin/linux_64/motionbuilder"));
        assert_eq!(interpreter, mobu_dir.join("bin/linux_64/mobupy"));
        assert_eq!(main.parent(), interpreter.parent());
    }

    #[test]
    fn test_windows_program_files() {
        let program_files = TempDir::new().unwrap();
        let mobu_dir = program_files
            .path()
            .join("Autodesk")
            .join("MotionBuilder 2025");
        install(&mobu_dir, &["bin", "x64"], &["motionbuilder.exe", "mobupy.exe"]);

        let host = Host::new(Platform::Windows).with_var("PROGRAMFILES", program_files.path());
        assert_eq!(mobu_install_dir(&host, "2025"), Some(mobu_dir.clone()));
        assert_eq!(
            find_mobu(&host, "2025").unwrap(),
            mobu_dir.join("bin").join("x64").join("motionbuilder.exe")
        );
    }

    #[test]
    fn test_windows_registry_fallback() {
        let program_files = TempDir::new().unwrap();
        let mobu_dir = TempDir::new().unwrap();
        install(mobu_dir.path(), &["bin", "x64"], &["mobupy.exe"]);

        let registry = StaticRegistry::new().with_value(
            r"SOFTWARE\Autodesk\MotionBuilder\2024",
            "InstallPath",
            mobu_dir.path().to_string_lossy(),
        );
        let host = Host::new(Platform::Windows)
            .with_var("PROGRAMFILES", program_files.path())
            .with_registry(registry);

        assert_eq!(
            find_mobupy(&host, "2024").unwrap(),
            mobu_dir.path().join("bin").join("x64").join("mobupy.exe")
        );
    }

    #[test]
    fn test_windows_program_files_wins_over_registry() {
        let program_files = TempDir::new().unwrap();
        let default = program_files
            .path()
            .join("Autodesk")
            .join("MotionBuilder 2025");
        install(&default, &["bin", "x64"], &["motionbuilder.exe"]);
        let registered = TempDir::new().unwrap();
        install(registered.path(), &["bin", "x64"], &["motionbuilder.exe"]);

        let registry = StaticRegistry::new().with_value(
            registry_key("2025"),
            REGISTRY_VALUE,
            registered.path().to_string_lossy(),
        );
        let host = Host::new(Platform::Windows)
            .with_var("PROGRAMFILES", program_files.path())
            .with_registry(registry);
        assert_eq!(
            find_mobu(&host, "2025").unwrap(),
            default.join("bin").join("x64").join("motionbuilder.exe")
        );
    }

    #[test]
    fn test_windows_program_files_without_bin_falls_back_to_registry() {
        let program_files = TempDir::new().unwrap();
        let incomplete = program_files
            .path()
            .join("Autodesk")
            .join("MotionBuilder 2025");
        fs::create_dir_all(&incomplete).unwrap();
        let registered = TempDir::new().unwrap();
        install(registered.path(), &["bin", "x64"], &["motionbuilder.exe"]);

        let registry = StaticRegistry::new().with_value(
            registry_key("2025"),
            REGISTRY_VALUE,
            registered.path().to_string_lossy(),
        );
        let host = Host::new(Platform::Windows)
            .with_var("PROGRAMFILES", program_files.path())
            .with_registry(registry);
        assert_eq!(
            mobu_install_dir(&host, "2025"),
            Some(registered.path().to_path_buf())
        );
    }

    #[test]
    fn test_windows_registry_missing_key() {
        let host = Host::new(Platform::Windows).with_registry(StaticRegistry::new());
        let err = find_mobu(&host, "2025").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "failed to locate MotionBuilder 2025 executable"
        );
    }

    #[test]
    fn test_missing_executable() {
        let root = TempDir::new().unwrap();
        let mobu_dir = root.path().join("MotionBuilder2025");
        install(&mobu_dir, &["bin", "linux_64"], &["motionbuilder"]);

        let host = Host::new(Platform::Linux).with_options(ResolveOptions {
            autodesk_root: root.path().to_path_buf(),
            ..Default::default()
        });
        let err = find_mobupy(&host, "2025").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::NotFound {
                source: Some(ref cause),
                ..
            } if matches!(**cause, ResolveError::MissingExecutable { .. })
        ));
    }
}
