//! cargo-audit-review - pull request reviews from `cargo audit` findings
//!
//! This library runs (or reads) a `cargo audit` report, traces every vulnerable
//! crate back through the resolved dependency graph to the direct dependency of
//! the reviewed package, and renders a review with one annotation per direct
//! dependency, anchored to its declaration in `Cargo.toml`.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`review`): Audit and graph models, chain resolution and rendering
//! - **Application Layer** (`application`): The review use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): cargo subprocesses, filesystem, GitHub API, console
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cargo_audit_review::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! let use_case = ReviewAuditUseCase::new(
//!     CargoCommandRunner::new(),
//!     CargoCommandRunner::new(),
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ReviewRequest::new(PathBuf::from("."))).await?;
//!
//! let output = MarkdownFormatter::new().format(&response.review)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod review;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, JsonAuditFile, JsonMetadataFile, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{GitHubContext, GitHubReviewPublisher};
    pub use crate::adapters::outbound::process::CargoCommandRunner;
    pub use crate::application::dto::{OutputFormat, ReviewRequest, ReviewResponse};
    pub use crate::application::use_cases::ReviewAuditUseCase;
    pub use crate::ports::outbound::{
        AuditSource, ManifestReader, MetadataSource, OutputPresenter, ProgressReporter,
        ProjectConfigReader, PublishedReview, ReviewFormatter, ReviewPublisher,
    };
    pub use crate::review::domain::{
        AggregatedReport, AuditReport, Chain, DependencyRecord, Finding, Review, ReviewComment,
        Verdict, Vulnerability,
    };
    pub use crate::review::services::{
        ChainFilter, ChainResolver, ManifestLineLocator, ReportRenderer, VulnerabilityAggregator,
    };
    pub use crate::shared::Result;
}
