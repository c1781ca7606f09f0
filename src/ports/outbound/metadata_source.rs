use crate::review::domain::DependencyRecord;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// MetadataSource port producing the full dependency graph of a project
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Returns every package of the resolved graph with its direct dependencies
    ///
    /// # Errors
    /// Returns an error if metadata cannot be produced or parsed.
    async fn dependency_graph(&self, project_path: &Path) -> Result<Vec<DependencyRecord>>;
}

#[async_trait]
impl<T: MetadataSource + ?Sized> MetadataSource for Box<T> {
    async fn dependency_graph(&self, project_path: &Path) -> Result<Vec<DependencyRecord>> {
        (**self).dependency_graph(project_path).await
    }
}
