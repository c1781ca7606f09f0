use crate::review::domain::AuditReport;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// AuditSource port producing the vulnerability audit of a project
///
/// Implementations either run `cargo audit --json` or read a report that
/// was produced earlier.
#[async_trait]
pub trait AuditSource: Send + Sync {
    /// Audits the project in `project_path`
    ///
    /// # Arguments
    /// * `project_path` - Directory containing `Cargo.toml` and `Cargo.lock`
    /// * `extra_args` - Additional flags for the audit tool (e.g. `--ignore <ID>`)
    ///
    /// # Errors
    /// Returns an error if the audit cannot be run or its output cannot be parsed.
    /// Finding vulnerabilities is not an error.
    async fn audit(&self, project_path: &Path, extra_args: &[String]) -> Result<AuditReport>;
}

#[async_trait]
impl<T: AuditSource + ?Sized> AuditSource for Box<T> {
    async fn audit(&self, project_path: &Path, extra_args: &[String]) -> Result<AuditReport> {
        (**self).audit(project_path, extra_args).await
    }
}
