//! Version output parsing with regex extraction.

use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("valid version pattern"))
}

/// Parse the first `major.minor[.patch]` version found in CLI output.
///
/// Handles the formats DCC tools print:
///
/// - `Blender 4.2.1 LTS` -> 4.2.1
/// - `Blender 2.93` -> 2.93.0
///
/// Returns `None` if no version pattern matches.
pub(crate) fn parse_version(output: &str) -> Option<Version> {
    let caps = version_regex().captures(output)?;
    let part = |i: usize| caps.get(i).map_or(Ok(0), |m| m.as_str().parse::<u64>());

    Some(Version::new(part(1).ok()?, part(2).ok()?, part(3).ok()?))
}
