//! Grouping parsed releases by package name.

use indexmap::IndexMap;

use super::{ParsedRelease, ReleaseGroup};

/// Bucket releases by package name, falling back to the repository name
/// for releases whose title did not parse.
///
/// Group order is first-seen order of each distinct key over the input
/// sequence; members keep input order. Sorting members for display is a
/// separate presentation step.
pub fn group_releases(releases: Vec<ParsedRelease>, fallback: &str) -> Vec<ReleaseGroup> {
    let mut groups: IndexMap<String, Vec<ParsedRelease>> = IndexMap::new();

    for release in releases {
        let key = release.group_key(fallback).to_string();
        groups.entry(key).or_default().push(release);
    }

    groups
        .into_iter()
        .map(|(name, members)| ReleaseGroup { name, members })
        .collect()
}
