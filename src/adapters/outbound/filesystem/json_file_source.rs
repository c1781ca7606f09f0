use crate::ports::outbound::{AuditSource, MetadataSource};
use crate::review::domain::{AuditReport, CargoMetadata, DependencyRecord};
use crate::shared::guarded_read::read_guarded_file;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Audit source reading a saved `cargo audit --json` report
///
/// The project path and extra audit flags are ignored: the report was
/// produced ahead of time, typically by an earlier CI step.
pub struct JsonAuditFile {
    path: PathBuf,
}

impl JsonAuditFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl AuditSource for JsonAuditFile {
    async fn audit(&self, _project_path: &Path, _extra_args: &[String]) -> Result<AuditReport> {
        let content = read_guarded_file(&self.path, "audit report")?;
        AuditReport::from_json(&content)
    }
}

/// Metadata source reading saved `cargo metadata --format-version=1` output
pub struct JsonMetadataFile {
    path: PathBuf,
}

impl JsonMetadataFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl MetadataSource for JsonMetadataFile {
    async fn dependency_graph(&self, _project_path: &Path) -> Result<Vec<DependencyRecord>> {
        let content = read_guarded_file(&self.path, "metadata file")?;
        Ok(CargoMetadata::from_json(&content)?.packages)
    }
}
