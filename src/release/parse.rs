//! Splitting composite release titles into package name and version.

/// Name and version segments recovered from a release title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSegments {
    pub name: String,
    pub version: String,
}

/// Split a release title on `@` into a package name and a version.
///
/// Only the final `@` is treated as the name/version boundary, so scoped
/// names keep their own `@` (e.g. `@scope/pkg@1.2.3` parses to name
/// `@scope/pkg`, version `1.2.3`). A title with no `@` at all yields the
/// whole input as the version and an empty name; callers treat an empty
/// name as unparsed.
pub fn parse_release_name(original_name: &str) -> ReleaseSegments {
    let mut segments: Vec<&str> = original_name.split('@').collect();
    let version = segments.pop().unwrap_or_default().to_string();
    let name = segments.join("@");

    ReleaseSegments { name, version }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_name() {
        let segments = parse_release_name("next@14.2.3");
        assert_eq!(segments.name, "next");
        assert_eq!(segments.version, "14.2.3");
    }

    #[test]
    fn test_parse_scoped_name() {
        let segments = parse_release_name("@scope/pkg@2.0.0");
        assert_eq!(segments.name, "@scope/pkg");
        assert_eq!(segments.version, "2.0.0");
    }

    #[test]
    fn test_parse_nested_scope() {
        let segments = parse_release_name("@vercel/static-build@2.5.9");
        assert_eq!(segments.name, "@vercel/static-build");
        assert_eq!(segments.version, "2.5.9");
    }

    #[test]
    fn test_parse_no_delimiter() {
        let segments = parse_release_name("justtag");
        assert_eq!(segments.name, "");
        assert_eq!(segments.version, "justtag");
    }

    #[test]
    fn test_parse_empty_input() {
        let segments = parse_release_name("");
        assert_eq!(segments.name, "");
        assert_eq!(segments.version, "");
    }

    #[test]
    fn test_parse_trailing_delimiter() {
        let segments = parse_release_name("pkg@");
        assert_eq!(segments.name, "pkg");
        assert_eq!(segments.version, "");
    }
}
