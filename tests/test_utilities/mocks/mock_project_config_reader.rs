use std::path::Path;
use cargo_audit_review::prelude::*;

/// Mock ProjectConfigReader for testing
pub struct MockProjectConfigReader {
    pub package_name: String,
    pub should_fail: bool,
}

impl MockProjectConfigReader {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            package_name: String::new(),
            should_fail: true,
        }
    }
}

impl ProjectConfigReader for MockProjectConfigReader {
    fn read_package_name(&self, _project_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock project config read failure");
        }
        Ok(self.package_name.clone())
    }
}
