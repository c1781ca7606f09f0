use crate::application::dto::{ReviewRequest, ReviewResponse};
use crate::ports::outbound::{
    AuditSource, ManifestReader, MetadataSource, ProgressReporter, ProjectConfigReader,
};
use crate::review::domain::{AggregatedReport, AuditReport, Review};
use crate::review::services::{ReportRenderer, VulnerabilityAggregator};
use crate::shared::Result;
use std::collections::HashSet;

/// ReviewAuditUseCase - Core use case turning an audit into a pull request review
///
/// # Type Parameters
/// * `AS` - AuditSource implementation
/// * `MS` - MetadataSource implementation
/// * `MR` - ManifestReader implementation
/// * `PCR` - ProjectConfigReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ReviewAuditUseCase<AS, MS, MR, PCR, PR> {
    audit_source: AS,
    metadata_source: MS,
    manifest_reader: MR,
    project_config_reader: PCR,
    progress_reporter: PR,
}

impl<AS, MS, MR, PCR, PR> ReviewAuditUseCase<AS, MS, MR, PCR, PR>
where
    AS: AuditSource,
    MS: MetadataSource,
    MR: ManifestReader,
    PCR: ProjectConfigReader,
    PR: ProgressReporter,
{
    pub fn new(
        audit_source: AS,
        metadata_source: MS,
        manifest_reader: MR,
        project_config_reader: PCR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            audit_source,
            metadata_source,
            manifest_reader,
            project_config_reader,
            progress_reporter,
        }
    }

    /// Executes the review use case
    ///
    /// The dependency graph and the manifest are only read when the audit
    /// reports something, so a clean project needs neither `cargo metadata`
    /// nor a readable `Cargo.toml`.
    pub async fn execute(&self, request: ReviewRequest) -> Result<ReviewResponse> {
        // Step 1: Run the audit
        let mut audit = self.run_audit(&request).await?;

        // Step 2: Drop ignored advisories
        let ignored_advisories = self.apply_ignored_advisories(&mut audit, &request);

        if !audit.has_vulnerabilities() {
            self.progress_reporter
                .report_completion("✅ No vulnerabilities found. Approving.");
            return Ok(ReviewResponse {
                review: Review::approved(),
                report: AggregatedReport::new(),
                vulnerability_count: 0,
                ignored_advisories,
            });
        }

        // Step 3: Resolve chains and group by direct dependency
        let root = self
            .project_config_reader
            .read_package_name(&request.project_path)?;
        let report = self.aggregate(&audit, &request, &root).await?;

        // Step 4: Render against the manifest
        let manifest = self.manifest_reader.read_manifest(&request.project_path)?;
        let renderer = ReportRenderer::new(&request.advisory_base_url, &request.manifest_file);
        let review = renderer.render(&report, &manifest, true)?;

        let vulnerability_count = audit.vulnerabilities().len();
        self.report_summary(vulnerability_count, &report);

        Ok(ReviewResponse {
            review,
            report,
            vulnerability_count,
            ignored_advisories,
        })
    }

    async fn run_audit(&self, request: &ReviewRequest) -> Result<AuditReport> {
        self.progress_reporter.report(&format!(
            "🔍 Running cargo audit in: {}",
            request.project_path.display()
        ));

        let audit = self
            .audit_source
            .audit(&request.project_path, &request.audit_args)
            .await?;

        self.progress_reporter.report(&format!(
            "📋 Audit reported {} vulnerability(ies)",
            audit.vulnerabilities().len()
        ));
        Ok(audit)
    }

    /// Removes ignored advisories and warns about ids the audit never reported
    fn apply_ignored_advisories(&self, audit: &mut AuditReport, request: &ReviewRequest) -> Vec<String> {
        if request.ignore_advisories.is_empty() {
            return Vec::new();
        }

        let ids: HashSet<String> = request.ignore_advisories.iter().cloned().collect();
        let removed = audit.ignore_advisories(&ids);

        if !removed.is_empty() {
            self.progress_reporter.report(&format!(
                "🚫 Ignored {} advisory(ies): {}",
                removed.len(),
                removed.join(", ")
            ));
        }

        for id in &request.ignore_advisories {
            if !removed.contains(id) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Ignored advisory '{}' was not reported by the audit.",
                    id
                ));
            }
        }

        removed
    }

    async fn aggregate(
        &self,
        audit: &AuditReport,
        request: &ReviewRequest,
        root: &str,
    ) -> Result<AggregatedReport> {
        self.progress_reporter
            .report("📖 Loading dependency graph from cargo metadata...");
        let records = self
            .metadata_source
            .dependency_graph(&request.project_path)
            .await?;
        self.progress_reporter.report(&format!(
            "✅ Loaded {} package(s); resolving chains from '{}'",
            records.len(),
            root
        ));

        let progress = |current: usize, total: usize| {
            self.progress_reporter
                .report_progress(current, total, Some("Resolving dependency chains"));
        };
        Ok(VulnerabilityAggregator::aggregate_with_progress(
            audit.vulnerabilities(),
            &records,
            root,
            &progress,
        ))
    }

    fn report_summary(&self, vulnerability_count: usize, report: &AggregatedReport) {
        if report.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "⚠️  {} vulnerability(ies) reported, none reachable from the package. Requesting changes.",
                vulnerability_count
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "⚠️  {} finding(s) through {} direct dependency(ies). Requesting changes.",
                report.finding_count(),
                report.len()
            ));
        }
    }
}
