/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (cargo, file system, GitHub, console).
pub mod audit_source;
pub mod formatter;
pub mod manifest_reader;
pub mod metadata_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_config_reader;
pub mod review_publisher;

pub use audit_source::AuditSource;
pub use formatter::ReviewFormatter;
pub use manifest_reader::ManifestReader;
pub use metadata_source::MetadataSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_config_reader::ProjectConfigReader;
pub use review_publisher::{PublishedReview, ReviewPublisher};
