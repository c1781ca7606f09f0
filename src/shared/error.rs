use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a review that requests
/// changes from a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - review produced (and published when requested)
    Success = 0,
    /// The review requests changes and `--fail-on-vulnerabilities` was given
    VulnerabilitiesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (cargo failure, API error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VulnerabilitiesDetected => write!(f, "Vulnerabilities Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for audit review generation.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Cargo.toml not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse Cargo.toml: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is valid TOML with a [package] table")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Command `{command}` failed\nDetails: {details}\n\n💡 Hint: {hint}")]
    CommandFailed {
        command: String,
        details: String,
        hint: String,
    },

    #[error("Failed to parse cargo audit output\nDetails: {details}\n\n💡 Hint: Make sure cargo-audit is recent enough to support `--json`")]
    AuditParseError { details: String },

    #[error("Failed to parse cargo metadata output\nDetails: {details}\n\n💡 Hint: Run `cargo metadata --format-version=1` manually to check its output")]
    MetadataParseError { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid Cargo project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("GitHub context unavailable: {reason}\n\n💡 Hint: Publishing only works inside GitHub Actions, or with GITHUB_REPOSITORY and GITHUB_EVENT_PATH set")]
    GitHubContext { reason: String },

    #[error("Failed to publish review (status {status})\nDetails: {details}\n\n💡 Hint: The token needs `pull-requests: write` permission")]
    PublishError { status: u16, details: String },

    /// Validation error for request and config values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
