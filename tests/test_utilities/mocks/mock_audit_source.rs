use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use cargo_audit_review::prelude::*;

/// Mock AuditSource returning a fixed report and recording the flags it got
#[derive(Clone)]
pub struct MockAuditSource {
    report_json: String,
    should_fail: bool,
    pub received_args: Arc<Mutex<Vec<String>>>,
}

impl MockAuditSource {
    pub fn new(report_json: impl Into<String>) -> Self {
        Self {
            report_json: report_json.into(),
            should_fail: false,
            received_args: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Builds a report from `(advisory id, package)` pairs
    pub fn with_vulnerabilities(entries: &[(&str, &str)]) -> Self {
        let list: Vec<String> = entries
            .iter()
            .map(|(id, package)| {
                format!(
                    r#"{{"advisory": {{"id": "{id}", "package": "{package}", "title": "{id} in {package}", "description": "Details of {id}."}},
                        "package": {{"name": "{package}", "version": "1.0.0"}}}}"#
                )
            })
            .collect();
        Self::new(format!(
            r#"{{"vulnerabilities": {{"found": {}, "count": {}, "list": [{}]}}}}"#,
            !entries.is_empty(),
            entries.len(),
            list.join(",")
        ))
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }
}

#[async_trait]
impl AuditSource for MockAuditSource {
    async fn audit(&self, _project_path: &Path, extra_args: &[String]) -> Result<AuditReport> {
        if self.should_fail {
            anyhow::bail!("Mock audit failure");
        }
        self.received_args
            .lock()
            .unwrap()
            .extend(extra_args.iter().cloned());
        AuditReport::from_json(&self.report_json)
    }
}
