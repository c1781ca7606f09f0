use crate::shared::error::ReviewError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any input file (manifest, audit JSON, metadata JSON).
/// `cargo metadata` output for large workspaces stays well below this.
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a text file after rejecting symlinks, non-regular files and
/// oversized files.
///
/// # Arguments
/// * `path` - File to read
/// * `description` - Human-readable file kind used in error messages (e.g. "Cargo.toml")
pub fn read_guarded_file(path: &Path, description: &str) -> Result<String> {
    read_guarded_file_with_limit(path, description, MAX_INPUT_FILE_SIZE)
}

pub(crate) fn read_guarded_file_with_limit(
    path: &Path,
    description: &str,
    max_size: u64,
) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReviewError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ReviewError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        return Err(ReviewError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Check that the right file was passed".to_string(),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        ReviewError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
