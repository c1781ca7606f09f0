use super::manifest_line_locator::ManifestLineLocator;
use crate::review::domain::{AggregatedReport, Chain, Finding, Review, ReviewComment, Verdict};
use crate::shared::Result;

/// Default location of RustSec advisory pages
pub const DEFAULT_ADVISORY_BASE_URL: &str = "https://rustsec.org/advisories";

/// Manifest path used for annotations, relative to the repository root
pub const DEFAULT_MANIFEST_FILE: &str = "Cargo.toml";

/// Separator between packages of a rendered dependency chain
const CHAIN_SEPARATOR: &str = " → ";

/// ReportRenderer service turning an aggregated report into a review
pub struct ReportRenderer {
    advisory_base_url: String,
    manifest_file: String,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_ADVISORY_BASE_URL, DEFAULT_MANIFEST_FILE)
    }
}

impl ReportRenderer {
    pub fn new(advisory_base_url: impl Into<String>, manifest_file: impl Into<String>) -> Self {
        Self {
            advisory_base_url: advisory_base_url.into().trim_end_matches('/').to_string(),
            manifest_file: manifest_file.into(),
        }
    }

    /// Renders the review.
    ///
    /// # Arguments
    /// * `report` - Findings grouped by direct dependency
    /// * `manifest` - Source text of the reviewed `Cargo.toml`
    /// * `vulnerabilities_found` - Whether the audit reported anything at all
    ///
    /// An approving review carries neither body nor annotations.
    pub fn render(
        &self,
        report: &AggregatedReport,
        manifest: &str,
        vulnerabilities_found: bool,
    ) -> Result<Review> {
        let verdict = Verdict::from_vulnerabilities_found(vulnerabilities_found);
        if !verdict.requests_changes() {
            return Ok(Review::approved());
        }

        Ok(Review {
            verdict,
            body: Some(self.render_summary(report)),
            comments: self.render_comments(report, manifest)?,
        })
    }

    /// Renders the summary body: a heading and one bullet per direct dependency.
    pub fn render_summary(&self, report: &AggregatedReport) -> String {
        let mut body = String::from("# Found Vulnerability Report");
        if report.finding_count() > 1 {
            body.push('s');
        }
        body.push_str("\n\n");

        for (dependency, findings) in report.iter() {
            if let [finding] = findings {
                body.push_str(&format!(
                    "- `{}`: {}\n",
                    dependency,
                    self.advisory_link(finding)
                ));
            } else {
                body.push_str(&format!("- `{}`\n", dependency));
                for finding in findings {
                    body.push_str(&format!("  - {}\n", self.advisory_link(finding)));
                }
            }
        }

        body
    }

    /// Renders one annotation per direct dependency, anchored to its
    /// declaration or to line 1.
    pub fn render_comments(
        &self,
        report: &AggregatedReport,
        manifest: &str,
    ) -> Result<Vec<ReviewComment>> {
        report
            .iter()
            .map(|(dependency, findings)| {
                let line = ManifestLineLocator::find_line(manifest, dependency)?.unwrap_or(1);
                let body = findings
                    .iter()
                    .map(|finding| self.render_finding(finding))
                    .collect::<Vec<_>>()
                    .join("\n\n");

                Ok(ReviewComment {
                    path: self.manifest_file.clone(),
                    line,
                    body,
                })
            })
            .collect()
    }

    fn render_finding(&self, finding: &Finding) -> String {
        format!(
            "# Vulnerability Report {}\n\n## Dependency Chain\n\n{}\n\n## {}\n\n{}",
            self.advisory_link(finding),
            Self::render_chain(&finding.chain),
            finding.advisory.title,
            finding.advisory.description
        )
    }

    /// Renders a chain vulnerable package first (bold), direct dependency last.
    pub fn render_chain(chain: &Chain) -> String {
        let packages = chain.packages();
        let last = packages.len() - 1;
        packages
            .iter()
            .enumerate()
            .rev()
            .map(|(position, name)| {
                if position == last {
                    format!("**`{}`**", name)
                } else {
                    format!("`{}`", name)
                }
            })
            .collect::<Vec<_>>()
            .join(CHAIN_SEPARATOR)
    }

    fn advisory_url(&self, id: &str) -> String {
        format!("{}/{}", self.advisory_base_url, id)
    }

    fn advisory_link(&self, finding: &Finding) -> String {
        let id = &finding.advisory.id;
        format!("[{}]({})", id, self.advisory_url(id))
    }
}
