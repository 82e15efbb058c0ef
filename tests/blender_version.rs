//! Blender `--version` queries against stand-in executables.
//!
//! Every test writes a shell script and then executes it. Writing and
//! spawning happen under one lock so no other test forks while a script is
//! still open for writing (which makes exec fail with "text file busy").

#![cfg(unix)]

use dccpath::{blender_version, find_blender, Host, Platform, ResolveOptions};
use semver::Version;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tempfile::TempDir;

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn spawn_lock() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn fake_blender(dir: &Path, body: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let exe = dir.join("blender");
    fs::write(&exe, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();
    exe
}

fn verifying_host(bin: &Path, timeout: Duration) -> Host {
    Host::new(Platform::Linux)
        .with_var("PATH", bin)
        .with_options(ResolveOptions {
            verify_blender_version: true,
            version_timeout: timeout,
            ..Default::default()
        })
}

#[test]
fn test_verify_blender_version() {
    let _guard = spawn_lock();
    let root = TempDir::new().unwrap();
    let bin = root.path().join("bin");
    let exe = fake_blender(&bin, "echo 'Blender 4.2.1 LTS'");

    assert_eq!(
        blender_version(&exe, Duration::from_secs(2)),
        Some(Version::new(4, 2, 1))
    );

    let path_only = Host::new(Platform::Linux).with_var("PATH", &bin);
    assert!(find_blender(&path_only, "4.2").is_err());

    let verified = verifying_host(&bin, Duration::from_secs(2));
    assert_eq!(find_blender(&verified, "4.2").unwrap(), exe);
    assert_eq!(find_blender(&verified, "4.2.1").unwrap(), exe);
    assert!(find_blender(&verified, "4.1").is_err());
}

#[test]
fn test_hung_blender_is_killed_after_timeout() {
    let _guard = spawn_lock();
    let root = TempDir::new().unwrap();
    let bin = root.path().join("bin");
    let exe = fake_blender(&bin, "exec sleep 8");

    let start = Instant::now();
    assert!(blender_version(&exe, Duration::from_millis(300)).is_none());
    assert!(start.elapsed() < Duration::from_secs(3), "took {:?}", start.elapsed());

    let host = verifying_host(&bin, Duration::from_millis(300));
    let start = Instant::now();
    let err = find_blender(&host, "4.2").unwrap_err();
    assert!(err.is_not_found());
    assert!(start.elapsed() < Duration::from_secs(3), "took {:?}", start.elapsed());
}

#[test]
fn test_version_read_from_stderr_when_stdout_empty() {
    let _guard = spawn_lock();
    let root = TempDir::new().unwrap();
    let exe = fake_blender(&root.path().join("bin"), "echo 'Blender 3.6.5' >&2");

    assert_eq!(
        blender_version(&exe, Duration::from_secs(2)),
        Some(Version::new(3, 6, 5))
    );
}

#[test]
fn test_failing_exit_status_yields_no_version() {
    let _guard = spawn_lock();
    let root = TempDir::new().unwrap();
    let bin = root.path().join("bin");
    let exe = fake_blender(&bin, "echo 'Blender 4.2.1'\nexit 3");

    assert!(blender_version(&exe, Duration::from_secs(2)).is_none());

    let host = verifying_host(&bin, Duration::from_secs(2));
    assert!(find_blender(&host, "4.2").is_err());
}
