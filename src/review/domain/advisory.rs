use crate::shared::error::ReviewError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashSet;

/// RustSec advisory as reported by `cargo audit --json`
///
/// Only the fields the review renders are modelled; everything else in the
/// advisory object is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Advisory {
    pub id: String,
    /// Name of the vulnerable crate
    pub package: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The resolved package an advisory applies to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VulnerablePackage {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// One entry of the audit's vulnerability list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vulnerability {
    pub advisory: Advisory,
    pub package: VulnerablePackage,
}

impl Vulnerability {
    /// Name used to key chain resolution.
    pub fn package_name(&self) -> &str {
        &self.package.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VulnerabilityList {
    #[serde(default)]
    pub found: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub list: Vec<Vulnerability>,
}

/// Subset of the `cargo audit --json` report consumed by the review
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuditReport {
    #[serde(default)]
    pub vulnerabilities: VulnerabilityList,
}

impl AuditReport {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            ReviewError::AuditParseError {
                details: e.to_string(),
            }
            .into()
        })
    }

    pub fn has_vulnerabilities(&self) -> bool {
        self.vulnerabilities.found || !self.vulnerabilities.list.is_empty()
    }

    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities.list
    }

    /// Drops vulnerabilities whose advisory id is in `ids`.
    ///
    /// Returns the ids that were actually removed, in list order and without
    /// repetition. When anything was removed, `found` and `count` are
    /// recomputed from the remaining list.
    pub fn ignore_advisories(&mut self, ids: &HashSet<String>) -> Vec<String> {
        let mut removed: Vec<String> = Vec::new();
        self.vulnerabilities.list.retain(|vulnerability| {
            let id = &vulnerability.advisory.id;
            if ids.contains(id) {
                if !removed.contains(id) {
                    removed.push(id.clone());
                }
                false
            } else {
                true
            }
        });

        if !removed.is_empty() {
            self.vulnerabilities.count = self.vulnerabilities.list.len();
            self.vulnerabilities.found = !self.vulnerabilities.list.is_empty();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUDIT_JSON: &str = r#"{
        "database": { "advisory-count": 600, "last-commit": "abc", "last-updated": "2024-01-01" },
        "lockfile": { "dependency-count": 3 },
        "settings": { "target_arch": null, "target_os": null, "severity": null, "ignore": [], "informational_warnings": [] },
        "vulnerabilities": {
            "found": true,
            "count": 2,
            "list": [
                {
                    "advisory": {
                        "id": "RUSTSEC-2024-0001",
                        "package": "vuln",
                        "title": "Out-of-bounds read",
                        "description": "Reading past the buffer end.",
                        "date": "2024-01-02",
                        "aliases": ["CVE-2024-1111"],
                        "related": [],
                        "collection": "crates",
                        "categories": ["memory-corruption"],
                        "keywords": [],
                        "cvss": null,
                        "informational": null,
                        "references": [],
                        "source": null,
                        "url": null,
                        "withdrawn": null,
                        "license": "CC0-1.0"
                    },
                    "versions": { "patched": [">=1.1"], "unaffected": [] },
                    "affected": null,
                    "package": {
                        "name": "vuln",
                        "version": "1.0.0",
                        "source": "registry+https://github.com/rust-lang/crates.io-index",
                        "checksum": "00",
                        "dependencies": [],
                        "replace": null
                    }
                },
                {
                    "advisory": {
                        "id": "RUSTSEC-2024-0002",
                        "package": "vuln",
                        "title": "Panic on empty input",
                        "description": "Denial of service."
                    },
                    "package": { "name": "vuln", "version": "1.0.0" }
                }
            ]
        },
        "warnings": {}
    }"#;

    #[test]
    fn test_audit_from_json() {
        let audit = AuditReport::from_json(AUDIT_JSON).unwrap();
        assert!(audit.has_vulnerabilities());
        assert_eq!(audit.vulnerabilities.count, 2);
        let first = &audit.vulnerabilities()[0];
        assert_eq!(first.advisory.id, "RUSTSEC-2024-0001");
        assert_eq!(first.advisory.aliases, vec!["CVE-2024-1111"]);
        assert_eq!(first.advisory.url, None);
        assert_eq!(first.package_name(), "vuln");
        assert_eq!(first.package.version, "1.0.0");
    }

    #[test]
    fn test_audit_without_vulnerabilities() {
        let audit =
            AuditReport::from_json(r#"{"vulnerabilities": {"found": false, "count": 0, "list": []}}"#)
                .unwrap();
        assert!(!audit.has_vulnerabilities());
        assert!(audit.vulnerabilities().is_empty());
    }

    #[test]
    fn test_audit_from_invalid_json() {
        let err = AuditReport::from_json("error: no such command").unwrap_err();
        assert!(err.to_string().contains("Failed to parse cargo audit output"));
    }

    #[test]
    fn test_ignore_advisories_recomputes_found() {
        let mut audit = AuditReport::from_json(AUDIT_JSON).unwrap();
        let ids: HashSet<String> = ["RUSTSEC-2024-0001", "RUSTSEC-2024-0002", "RUSTSEC-1999-0000"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let removed = audit.ignore_advisories(&ids);

        assert_eq!(removed, vec!["RUSTSEC-2024-0001", "RUSTSEC-2024-0002"]);
        assert!(!audit.has_vulnerabilities());
        assert_eq!(audit.vulnerabilities.count, 0);
    }

    #[test]
    fn test_ignore_advisories_partial() {
        let mut audit = AuditReport::from_json(AUDIT_JSON).unwrap();
        let ids: HashSet<String> = ["RUSTSEC-2024-0002".to_string()].into_iter().collect();

        audit.ignore_advisories(&ids);

        assert!(audit.has_vulnerabilities());
        assert_eq!(audit.vulnerabilities.count, 1);
        assert_eq!(audit.vulnerabilities()[0].advisory.id, "RUSTSEC-2024-0001");
    }

    #[test]
    fn test_ignore_nothing_keeps_counts() {
        let mut audit = AuditReport::from_json(AUDIT_JSON).unwrap();
        let removed = audit.ignore_advisories(&HashSet::new());
        assert!(removed.is_empty());
        assert_eq!(audit.vulnerabilities.count, 2);
    }
}
