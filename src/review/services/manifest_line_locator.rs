use crate::shared::Result;
use regex::Regex;

/// Table names that declare dependencies: `dependencies`, `dev-dependencies`,
/// `build-dependencies` (dash or underscore)
const DEPENDENCIES_TABLE: &str = r"(?:(?:build|dev)[-_])?dependencies";

/// A key preceding an inline-table entry, bare or quoted
const INLINE_KEY: &str = r#"(?:"[^"]+"|[A-Za-z0-9_.-]+)"#;

/// A string or inline-table value of an inline-table entry
const INLINE_VALUE: &str = r#"(?:"[^"]*"|\{[^}]*\})"#;

fn bare_or_quoted(pattern: &str) -> String {
    format!(r#"(?:"{p}"|{p})"#, p = pattern)
}

/// The four line predicates used to locate one dependency's declaration
pub struct ManifestPatterns {
    dependencies_header: Regex,
    table_header: Regex,
    dependency_declaration: Regex,
    root_inline_declaration: Regex,
}

impl ManifestPatterns {
    pub fn new(dependency: &str) -> Result<Self> {
        let table = bare_or_quoted(DEPENDENCIES_TABLE);
        let target = bare_or_quoted(&regex::escape(dependency));

        Ok(Self {
            dependencies_header: Regex::new(&format!(r"^\s*\[{table}(?:\.{target})?\]"))?,
            table_header: Regex::new(r"^\s*\[")?,
            dependency_declaration: Regex::new(&format!(
                r"^\s*(?:\[{table}\.{target}\]|{target}\s*[=.])"
            ))?,
            root_inline_declaration: Regex::new(&format!(
                r"^\s*{table}\s*=\s*\{{(?:\s*{INLINE_KEY}\s*=\s*{INLINE_VALUE}\s*,)*\s*{target}\s*="
            ))?,
        })
    }

    /// `[dependencies]`, `[dev-dependencies]`, ... or `[dependencies.<target>]`
    pub fn is_dependencies_header(&self, line: &str) -> bool {
        self.dependencies_header.is_match(line)
    }

    /// Any table header
    pub fn is_table_header(&self, line: &str) -> bool {
        self.table_header.is_match(line)
    }

    /// `<target> = ...`, `<target>.workspace = ...` or `[dependencies.<target>]`
    pub fn is_dependency_declaration(&self, line: &str) -> bool {
        self.dependency_declaration.is_match(line)
    }

    /// `dependencies = { ..., <target> = ... }` in the root table
    pub fn is_root_inline_declaration(&self, line: &str) -> bool {
        self.root_inline_declaration.is_match(line)
    }
}

/// ManifestLineLocator service finding where a dependency is declared
pub struct ManifestLineLocator;

impl ManifestLineLocator {
    /// Finds the 1-based line declaring `dependency` in `manifest`.
    ///
    /// Returns `Ok(None)` when no declaration is recognised; callers anchor
    /// to line 1 in that case.
    pub fn find_line(manifest: &str, dependency: &str) -> Result<Option<usize>> {
        let patterns = ManifestPatterns::new(dependency)?;
        Ok(Self::find_line_with(&patterns, manifest))
    }

    pub fn find_line_with(patterns: &ManifestPatterns, manifest: &str) -> Option<usize> {
        let mut in_dependencies_block = false;
        let mut in_root_table = true;

        for (index, line) in manifest.lines().enumerate() {
            if patterns.is_dependencies_header(line) {
                in_root_table = false;
                in_dependencies_block = true;
            } else if patterns.is_table_header(line) {
                in_root_table = false;
                in_dependencies_block = false;
            }

            let declared_in_block =
                in_dependencies_block && patterns.is_dependency_declaration(line);
            let declared_in_root = in_root_table && patterns.is_root_inline_declaration(line);
            if declared_in_block || declared_in_root {
                return Some(index + 1);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"[package]
name = "app"
version = "0.1.0"

[dependencies.foo]
version = "1.0"
features = ["std"]

[dependencies]
bar = "1.0"
"baz" = { version = "2" }
serde.workspace = true

[dev-dependencies]
tempfile = "3"

[build-dependencies]
cc = "1"

[features]
foo = []
"#;

    #[test]
    fn test_dedicated_table_header() {
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "foo").unwrap(), Some(5));
    }

    #[test]
    fn test_inline_assignment_in_dependencies() {
        let manifest = "[package]\n\n[dependencies]\nfoo = \"1.0\"\n";
        assert_eq!(ManifestLineLocator::find_line(manifest, "foo").unwrap(), Some(4));

        let manifest = "[package]\n[dependencies]\nfoo = \"1.0\"\n";
        assert_eq!(ManifestLineLocator::find_line(manifest, "foo").unwrap(), Some(3));
    }

    #[test]
    fn test_quoted_and_dotted_keys() {
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "bar").unwrap(), Some(10));
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "baz").unwrap(), Some(11));
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "serde").unwrap(), Some(12));
    }

    #[test]
    fn test_dev_and_build_dependencies() {
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "tempfile").unwrap(), Some(15));
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "cc").unwrap(), Some(18));
    }

    #[test]
    fn test_no_match_outside_dependency_tables() {
        // `name` and `version` only appear under [package] and [dependencies.foo]
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "name").unwrap(), None);
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "version").unwrap(), None);
    }

    #[test]
    fn test_absent_dependency() {
        assert_eq!(ManifestLineLocator::find_line(MANIFEST, "tokio").unwrap(), None);
        assert_eq!(ManifestLineLocator::find_line("", "tokio").unwrap(), None);
    }

    #[test]
    fn test_prefix_does_not_match() {
        let manifest = "[dependencies]\nfoobar = \"1\"\nfoo = \"1\"\n";
        assert_eq!(ManifestLineLocator::find_line(manifest, "foo").unwrap(), Some(3));
    }

    #[test]
    fn test_root_inline_table() {
        let manifest = "dependencies = { bar = \"1\", foo = { version = \"2\" } }\n[package]\n";
        assert_eq!(ManifestLineLocator::find_line(manifest, "foo").unwrap(), Some(1));
        assert_eq!(ManifestLineLocator::find_line(manifest, "bar").unwrap(), Some(1));
    }

    #[test]
    fn test_root_inline_table_only_before_headers() {
        let manifest = "[package]\ndependencies = { foo = \"1\" }\n";
        assert_eq!(ManifestLineLocator::find_line(manifest, "foo").unwrap(), None);
    }

    #[test]
    fn test_windows_line_endings() {
        let manifest = "[package]\r\nname = \"app\"\r\n\r\n[dependencies]\r\nfoo = \"1\"\r\n";
        assert_eq!(ManifestLineLocator::find_line(manifest, "foo").unwrap(), Some(5));
    }

    #[test]
    fn test_names_with_regex_metacharacters() {
        let manifest = "[dependencies]\nfooxbar = \"1\"\n\"foo.bar\" = \"1\"\n";
        assert_eq!(ManifestLineLocator::find_line(manifest, "foo.bar").unwrap(), Some(3));
    }

    #[test]
    fn test_predicates_individually() {
        let patterns = ManifestPatterns::new("foo").unwrap();

        assert!(patterns.is_dependencies_header("[dependencies]"));
        assert!(patterns.is_dependencies_header("  [dev_dependencies]"));
        assert!(patterns.is_dependencies_header("[\"build-dependencies\"]"));
        assert!(patterns.is_dependencies_header("[dependencies.\"foo\"]"));
        assert!(!patterns.is_dependencies_header("[dependencies.bar]"));
        assert!(!patterns.is_dependencies_header("[package]"));

        assert!(patterns.is_table_header("[package]"));
        assert!(patterns.is_table_header("  [[bin]]"));
        assert!(!patterns.is_table_header("foo = \"1\""));

        assert!(patterns.is_dependency_declaration("foo = \"1\""));
        assert!(patterns.is_dependency_declaration("\"foo\"={ path = \"../foo\" }"));
        assert!(patterns.is_dependency_declaration("foo.workspace = true"));
        assert!(patterns.is_dependency_declaration("[dev-dependencies.foo]"));
        assert!(!patterns.is_dependency_declaration("foobar = \"1\""));
        assert!(!patterns.is_dependency_declaration("# foo = \"1\""));

        assert!(patterns.is_root_inline_declaration("dependencies = { foo = \"1\" }"));
        assert!(patterns.is_root_inline_declaration(
            "dev-dependencies = { a = \"1\", b = { path = \"b\" }, foo = \"2\" }"
        ));
        assert!(!patterns.is_root_inline_declaration("dependencies = { foobar = \"1\" }"));
    }
}
