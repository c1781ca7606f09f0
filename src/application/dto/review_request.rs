use crate::review::services::{DEFAULT_ADVISORY_BASE_URL, DEFAULT_MANIFEST_FILE};
use std::path::PathBuf;

/// ReviewRequest - Internal request DTO for the audit review use case
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    /// Path to the package directory containing Cargo.toml
    pub project_path: PathBuf,
    /// Extra flags appended to `cargo audit --json`
    pub audit_args: Vec<String>,
    /// Advisory ids removed from the audit before aggregation
    pub ignore_advisories: Vec<String>,
    /// Base URL advisory ids are appended to
    pub advisory_base_url: String,
    /// Manifest path annotations are attached to, relative to the repository root
    pub manifest_file: String,
}

impl ReviewRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            audit_args: Vec::new(),
            ignore_advisories: Vec::new(),
            advisory_base_url: DEFAULT_ADVISORY_BASE_URL.to_string(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
        }
    }
}
