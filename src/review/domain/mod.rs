pub mod advisory;
pub mod aggregated_report;
pub mod ancestry_tree;
pub mod chain;
pub mod dependency_record;
pub mod review;

pub use advisory::{Advisory, AuditReport, Vulnerability, VulnerabilityList, VulnerablePackage};
pub use aggregated_report::AggregatedReport;
pub use ancestry_tree::AncestryTree;
pub use chain::{Chain, Finding};
pub use dependency_record::{CargoMetadata, DependencyRecord, DependencyRef};
pub use review::{Review, ReviewComment, Verdict};
