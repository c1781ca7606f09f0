use crate::ports::outbound::{ManifestReader, ProjectConfigReader};
use crate::shared::error::ReviewError;
use crate::shared::guarded_read::read_guarded_file;
use crate::shared::Result;
use std::path::Path;

const MANIFEST_FILENAME: &str = "Cargo.toml";

/// FileSystemReader adapter for reading the project manifest
///
/// This adapter implements both ManifestReader and ProjectConfigReader ports.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_manifest_file(&self, project_path: &Path) -> Result<String> {
        let manifest_path = project_path.join(MANIFEST_FILENAME);

        if !manifest_path.exists() {
            return Err(ReviewError::ManifestNotFound {
                path: manifest_path,
                suggestion: format!(
                    "Cargo.toml does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a Cargo package, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        read_guarded_file(&manifest_path, MANIFEST_FILENAME)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<String> {
        self.read_manifest_file(project_path)
    }
}

impl ProjectConfigReader for FileSystemReader {
    fn read_package_name(&self, project_path: &Path) -> Result<String> {
        let content = self.read_manifest_file(project_path)?;
        let manifest_path = project_path.join(MANIFEST_FILENAME);

        let manifest: toml::Value =
            toml::from_str(&content).map_err(|e| ReviewError::ManifestParseError {
                path: manifest_path.clone(),
                details: e.to_string(),
            })?;

        let package = manifest
            .get("package")
            .ok_or_else(|| ReviewError::ManifestParseError {
                path: manifest_path.clone(),
                details: "No [package] table found (virtual workspace manifests cannot be reviewed; point --path at a member crate)".to_string(),
            })?;

        let name = package
            .get("name")
            .and_then(|n| n.as_str())
            .ok_or_else(|| ReviewError::ManifestParseError {
                path: manifest_path,
                details: "Package name not found in [package] table".to_string(),
            })?;

        Ok(name.to_string())
    }
}
