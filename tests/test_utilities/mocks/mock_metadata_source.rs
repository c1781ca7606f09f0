use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use cargo_audit_review::prelude::*;

/// Mock MetadataSource serving a fixed dependency graph
#[derive(Clone, Default)]
pub struct MockMetadataSource {
    records: Vec<DependencyRecord>,
    should_fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockMetadataSource {
    /// Builds the graph from `(package, dependencies)` pairs
    pub fn new(graph: &[(&str, &[&str])]) -> Self {
        Self {
            records: graph
                .iter()
                .map(|(name, deps)| DependencyRecord::new(*name, deps))
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataSource for MockMetadataSource {
    async fn dependency_graph(&self, _project_path: &Path) -> Result<Vec<DependencyRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock metadata failure");
        }
        Ok(self.records.clone())
    }
}
