use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading the raw `Cargo.toml` text
///
/// The text is only used to anchor review annotations to declaration lines.
pub trait ManifestReader {
    /// Reads `Cargo.toml` from the specified project directory
    ///
    /// # Errors
    /// Returns an error if the manifest does not exist or cannot be read.
    fn read_manifest(&self, project_path: &Path) -> Result<String>;
}
