use crate::ports::outbound::ReviewFormatter;
use crate::review::domain::{Review, ReviewComment, Verdict};
use crate::shared::Result;

/// MarkdownFormatter adapter rendering a review as one Markdown document
///
/// The summary body comes first, followed by every annotation under a
/// heading naming its file and line. Suited for job summaries and local
/// inspection before publishing.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_body(&self, output: &mut String, review: &Review) {
        match &review.body {
            Some(body) => {
                output.push_str(body.trim_end());
                output.push_str("\n\n");
            }
            None => {
                output.push_str("# No Vulnerabilities Found\n\n");
                output.push_str("`cargo audit` reported no advisories for this project.\n\n");
            }
        }
    }

    fn render_verdict(&self, output: &mut String, verdict: Verdict) {
        let event = match verdict {
            Verdict::Approve => "APPROVE",
            Verdict::ChangesRequested => "REQUEST_CHANGES",
        };
        output.push_str(&format!("**Review verdict:** {} (`{}`)\n", verdict, event));
    }

    fn render_comment(&self, output: &mut String, comment: &ReviewComment) {
        output.push_str(&format!(
            "\n---\n\n### `{}` line {}\n\n",
            comment.path, comment.line
        ));
        output.push_str(comment.body.trim_end());
        output.push('\n');
    }
}

impl ReviewFormatter for MarkdownFormatter {
    fn format(&self, review: &Review) -> Result<String> {
        let mut output = String::new();

        self.render_body(&mut output, review);
        self.render_verdict(&mut output, review.verdict);
        for comment in &review.comments {
            self.render_comment(&mut output, comment);
        }

        Ok(output)
    }
}
