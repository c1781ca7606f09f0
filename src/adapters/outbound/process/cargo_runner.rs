use crate::ports::outbound::{AuditSource, MetadataSource};
use crate::review::domain::{AuditReport, CargoMetadata, DependencyRecord};
use crate::shared::error::ReviewError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;

const AUDIT_INSTALL_HINT: &str = "Install the audit subcommand with `cargo install cargo-audit`";

/// CargoCommandRunner adapter running `cargo audit` and `cargo metadata`
///
/// `cargo audit` exits non-zero whenever it finds vulnerabilities, so its
/// exit status is ignored as long as it printed a JSON report.
pub struct CargoCommandRunner {
    cargo: String,
    fetch_before_metadata: bool,
}

impl CargoCommandRunner {
    /// Uses the `cargo` that invoked us (`$CARGO`) when run as a cargo
    /// subcommand, `cargo` from `PATH` otherwise.
    pub fn new() -> Self {
        let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
        Self::with_program(cargo)
    }

    pub fn with_program(cargo: impl Into<String>) -> Self {
        Self {
            cargo: cargo.into(),
            fetch_before_metadata: true,
        }
    }

    /// Skips `cargo fetch`; `cargo metadata --offline` then relies on an
    /// already populated registry cache.
    pub fn without_fetch(mut self) -> Self {
        self.fetch_before_metadata = false;
        self
    }

    fn describe(&self, args: &[String]) -> String {
        format!("{} {}", self.cargo, args.join(" "))
    }

    async fn run(&self, project_path: &Path, args: &[String]) -> Result<Output> {
        Command::new(&self.cargo)
            .args(args)
            .current_dir(project_path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                ReviewError::CommandFailed {
                    command: self.describe(args),
                    details: e.to_string(),
                    hint: "Make sure cargo is installed and available on PATH".to_string(),
                }
                .into()
            })
    }

    /// Runs a command that must exit successfully and returns its stdout.
    async fn run_checked(&self, project_path: &Path, args: &[String], hint: &str) -> Result<String> {
        let output = self.run(project_path, args).await?;
        if !output.status.success() {
            return Err(ReviewError::CommandFailed {
                command: self.describe(args),
                details: format!(
                    "exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
                hint: hint.to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn audit_args(extra_args: &[String]) -> Vec<String> {
        let mut args = vec!["audit".to_string(), "--json".to_string()];
        args.extend(extra_args.iter().cloned());
        args
    }

    fn audit_failure(&self, args: &[String], output: &Output) -> ReviewError {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let hint = if stderr.contains("no such command") {
            AUDIT_INSTALL_HINT.to_string()
        } else {
            "Run the command manually to inspect its output".to_string()
        };

        ReviewError::CommandFailed {
            command: self.describe(args),
            details: if stderr.is_empty() {
                format!("exited with {} without printing a report", output.status)
            } else {
                stderr
            },
            hint,
        }
    }
}

impl Default for CargoCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditSource for CargoCommandRunner {
    async fn audit(&self, project_path: &Path, extra_args: &[String]) -> Result<AuditReport> {
        let args = Self::audit_args(extra_args);
        let output = self.run(project_path, &args).await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Err(self.audit_failure(&args, &output).into());
        }

        AuditReport::from_json(&stdout)
    }
}

#[async_trait]
impl MetadataSource for CargoCommandRunner {
    async fn dependency_graph(&self, project_path: &Path) -> Result<Vec<DependencyRecord>> {
        if self.fetch_before_metadata {
            self.run_checked(
                project_path,
                &["fetch".to_string()],
                "Check network access to the registry and that Cargo.lock is valid",
            )
            .await?;
        }

        let args: Vec<String> = ["metadata", "--offline", "--format-version=1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let stdout = self
            .run_checked(
                project_path,
                &args,
                "Run `cargo fetch` first so that metadata can be resolved offline",
            )
            .await?;

        Ok(CargoMetadata::from_json(&stdout)?.packages)
    }
}
