use crate::shared::Result;
use std::path::Path;

/// ProjectConfigReader port for reading project identity
pub trait ProjectConfigReader {
    /// Reads the root package name (`[package].name` of `Cargo.toml`)
    ///
    /// # Errors
    /// Returns an error if:
    /// - `Cargo.toml` does not exist
    /// - The file cannot be parsed
    /// - The manifest has no `[package]` table (virtual workspace)
    fn read_package_name(&self, project_path: &Path) -> Result<String>;
}
