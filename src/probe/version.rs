//! Version query by running an executable, with a deadline.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// Run `path --version` and capture its output.
///
/// The child is killed if it has not exited within `timeout`, and the call
/// fails with [`io::ErrorKind::TimedOut`]. Stdout is preferred; stderr is
/// used when stdout is empty. A non-zero exit status or non-UTF-8 output is
/// reported as an error.
pub(crate) fn query_version(path: &Path, timeout: Duration) -> io::Result<String> {
    let mut child = Command::new(path)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let status = match child.wait_timeout(timeout)? {
        Some(status) => status,
        None => {
            // The child may have exited since the deadline.
            let _ = child.kill();
            child.wait()?;
            return Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("{} --version timed out after {timeout:?}", path.display()),
            ));
        }
    };

    if !status.success() {
        return Err(io::Error::other(format!(
            "{} --version exited with {status}",
            path.display()
        )));
    }

    let mut stdout = Vec::new();
    if let Some(mut pipe) = child.stdout.take() {
        pipe.read_to_end(&mut stdout)?;
    }
    let out = if !stdout.is_empty() {
        stdout
    } else {
        let mut stderr = Vec::new();
        if let Some(mut pipe) = child.stderr.take() {
            pipe.read_to_end(&mut stderr)?;
        }
        stderr
    };

    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
