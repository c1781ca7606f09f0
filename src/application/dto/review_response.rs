use crate::review::domain::{AggregatedReport, Review};

/// ReviewResponse - Internal response DTO from the audit review use case
#[derive(Debug, Clone)]
pub struct ReviewResponse {
    /// The rendered review, ready to format or publish
    pub review: Review,
    /// Findings grouped by direct dependency (empty when nothing was found)
    pub report: AggregatedReport,
    /// Vulnerabilities left after ignored advisories were removed
    pub vulnerability_count: usize,
    /// Ignored advisory ids that the audit actually reported
    pub ignored_advisories: Vec<String>,
}

impl ReviewResponse {
    pub fn requests_changes(&self) -> bool {
        self.review.verdict.requests_changes()
    }
}
