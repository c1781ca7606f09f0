//! Configuration file support for cargo-audit-review.
//!
//! Provides YAML-based configuration through `cargo-audit-review.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use cargo_audit_review::application::dto::OutputFormat;
use cargo_audit_review::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "cargo-audit-review.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub fail_on_vulnerabilities: Option<bool>,
    /// Extra flags for `cargo audit`, as one whitespace-separated string
    pub audit_args: Option<String>,
    pub ignore_advisories: Option<Vec<IgnoreAdvisory>>,
    pub advisory_base_url: Option<String>,
    pub manifest_file: Option<String>,
    pub publish: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// An advisory to drop from the audit before reviewing.
#[derive(Debug, Deserialize)]
pub struct IgnoreAdvisory {
    pub id: String,
    pub reason: Option<String>,
}

impl ConfigFile {
    pub fn ignored_advisory_ids(&self) -> Vec<String> {
        self.ignore_advisories
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.id.trim().to_string())
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: format: {}", e);
        }
    }

    if let Some(ref url) = config.advisory_base_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!(
                "Invalid config: advisory_base_url must be an http(s) URL, got '{}'.\n\n\
                 💡 Hint: The default is \"https://rustsec.org/advisories\".",
                url
            );
        }
    }

    if let Some(ref ignore_advisories) = config.ignore_advisories {
        for (i, entry) in ignore_advisories.iter().enumerate() {
            if entry.id.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_advisories[{}].id must not be empty.\n\n\
                     💡 Hint: Each ignore_advisories entry must have a non-empty 'id' field (e.g., \"RUSTSEC-2023-0071\").",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
fail_on_vulnerabilities: true
audit_args: "--no-fetch --stale"
advisory_base_url: https://rustsec.example/advisories
manifest_file: crates/app/Cargo.toml
publish: false
ignore_advisories:
  - id: RUSTSEC-2023-0071
    reason: "No RSA private keys handled"
  - id: RUSTSEC-2020-0071
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.fail_on_vulnerabilities, Some(true));
        assert_eq!(config.audit_args.as_deref(), Some("--no-fetch --stale"));
        assert_eq!(
            config.advisory_base_url.as_deref(),
            Some("https://rustsec.example/advisories")
        );
        assert_eq!(config.manifest_file.as_deref(), Some("crates/app/Cargo.toml"));
        assert_eq!(config.publish, Some(false));
        let ignored = config.ignore_advisories.as_ref().unwrap();
        assert_eq!(ignored.len(), 2);
        assert_eq!(
            ignored[0].reason.as_deref(),
            Some("No RSA private keys handled")
        );
        assert!(ignored[1].reason.is_none());
        assert_eq!(
            config.ignored_advisory_ids(),
            vec!["RUSTSEC-2023-0071", "RUSTSEC-2020-0071"]
        );
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: markdown\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert!(config.ignored_advisory_ids().is_empty());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_advisory_id_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            "ignore_advisories:\n  - id: \"   \"\n    reason: \"whitespace only\"\n",
        )
        .unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("ignore_advisories[0].id must not be empty"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: sarif\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format: sarif"));
    }

    #[test]
    fn test_invalid_advisory_url_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "advisory_base_url: rustsec.org/advisories\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must be an http(s) URL"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: json\nignore_cves: []\ncheck_cve: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("ignore_cves"));
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "{}\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.format.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
