/// Mock implementations for testing
mod mock_audit_source;
mod mock_manifest_reader;
mod mock_metadata_source;
mod mock_progress_reporter;
mod mock_project_config_reader;

pub use mock_audit_source::MockAuditSource;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_metadata_source::MockMetadataSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_config_reader::MockProjectConfigReader;
