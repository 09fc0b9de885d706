//! Release domain types and the pure parse/order/group building blocks.

mod group;
mod order;
mod parse;

use crate::source::RawRelease;

pub use group::group_releases;
pub use order::{compare_versions, lenient_parse};
pub use parse::{ReleaseSegments, parse_release_name};

/// Shown in place of a version when the release name could not be parsed.
pub const UNPARSED_MARKER: &str = "(failed to parse)";

/// A raw release plus the package name and version recovered from its title.
///
/// Both parsed fields are absent when the release has no title; such a
/// release groups under the repository-name fallback and cannot be sorted
/// by version.
#[derive(Debug, Clone)]
pub struct ParsedRelease {
    pub raw: RawRelease,
    pub parsed_name: Option<String>,
    pub parsed_version: Option<String>,
}

impl ParsedRelease {
    /// Parse the release title, when there is one.
    pub fn from_raw(raw: RawRelease) -> Self {
        match raw.name.as_deref() {
            Some(name) => {
                let segments = parse_release_name(name);
                Self {
                    parsed_name: Some(segments.name),
                    parsed_version: Some(segments.version),
                    raw,
                }
            }
            None => Self {
                raw,
                parsed_name: None,
                parsed_version: None,
            },
        }
    }

    /// Grouping key: the parsed package name if non-empty, else `fallback`.
    pub fn group_key<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.parsed_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => fallback,
        }
    }

    /// Version label for display, with the unparsed marker as fallback.
    pub fn display_version(&self) -> &str {
        self.parsed_version.as_deref().unwrap_or(UNPARSED_MARKER)
    }
}

/// Releases sharing one package name, in a stable order.
#[derive(Debug, Clone)]
pub struct ReleaseGroup {
    pub name: String,
    pub members: Vec<ParsedRelease>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u64, name: Option<&str>) -> RawRelease {
        RawRelease {
            id,
            name: name.map(String::from),
            tag_name: format!("tag-{}", id),
            html_url: format!("https://example.com/r/{}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_raw_with_title() {
        let parsed = ParsedRelease::from_raw(raw(1, Some("pkg@1.2.3")));
        assert_eq!(parsed.parsed_name.as_deref(), Some("pkg"));
        assert_eq!(parsed.parsed_version.as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_from_raw_without_title() {
        let parsed = ParsedRelease::from_raw(raw(2, None));
        assert!(parsed.parsed_name.is_none());
        assert!(parsed.parsed_version.is_none());
        assert_eq!(parsed.display_version(), UNPARSED_MARKER);
    }

    #[test]
    fn test_group_key_prefers_parsed_name() {
        let parsed = ParsedRelease::from_raw(raw(1, Some("pkg@1.0.0")));
        assert_eq!(parsed.group_key("repo"), "pkg");
    }

    #[test]
    fn test_group_key_empty_name_falls_back() {
        // "v1.0.0" has no '@', so the parsed name is empty
        let parsed = ParsedRelease::from_raw(raw(1, Some("v1.0.0")));
        assert_eq!(parsed.group_key("repo"), "repo");

        let parsed = ParsedRelease::from_raw(raw(2, None));
        assert_eq!(parsed.group_key("repo"), "repo");
    }
}
