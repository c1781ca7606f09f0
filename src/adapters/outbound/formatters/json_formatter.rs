use crate::ports::outbound::ReviewFormatter;
use crate::review::domain::Review;
use crate::shared::Result;

/// JsonFormatter adapter emitting the review as the GitHub API request payload
///
/// The output can be posted unchanged to
/// `POST /repos/{owner}/{repo}/pulls/{number}/reviews`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewFormatter for JsonFormatter {
    fn format(&self, review: &Review) -> Result<String> {
        let mut json = serde_json::to_string_pretty(review)?;
        json.push('\n');
        Ok(json)
    }
}
