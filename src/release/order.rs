//! Semantic-version ordering tolerant of junk input.

use std::cmp::Ordering;

use log::debug;
use semver::Version;

/// Compare two optional version strings in descending semver order
/// (newest first).
///
/// Any side that is absent or fails to parse makes the pair
/// not-comparable: the failure is logged and the pair is treated as equal,
/// so a stable sort leaves such entries where they are. Never panics.
pub fn compare_versions(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(lenient_parse), b.and_then(lenient_parse)) {
        (Some(va), Some(vb)) => vb.cmp(&va),
        _ => {
            debug!("failed to compare versions {:?} and {:?}", a, b);
            Ordering::Equal
        }
    }
}

/// Parse a version string leniently.
///
/// Strips a leading `v` and pads partial versions with zeros
/// ("1" -> 1.0.0, "1.2" -> 1.2.0) before handing off to semver.
pub fn lenient_parse(version: &str) -> Option<Version> {
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}
