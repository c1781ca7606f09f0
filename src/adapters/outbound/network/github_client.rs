use super::github_context::GitHubContext;
use crate::ports::outbound::{PublishedReview, ReviewPublisher};
use crate::review::domain::Review;
use crate::shared::error::ReviewError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct CreatedReview {
    id: u64,
    #[serde(default)]
    html_url: Option<String>,
}

/// GitHubReviewPublisher adapter submitting reviews through the REST API
///
/// # Security
/// - The token is only sent as a bearer header, never logged
/// - Requests time out after 30 seconds
/// - Failed requests are not retried; a second review would duplicate comments
pub struct GitHubReviewPublisher {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl GitHubReviewPublisher {
    const TIMEOUT_SECONDS: u64 = 30;
    const API_VERSION: &'static str = "2022-11-28";

    /// Fails when the context has no token or no pull request.
    pub fn new(context: &GitHubContext) -> Result<Self> {
        let pull_request = context.pull_request.ok_or_else(|| ReviewError::GitHubContext {
            reason: "The triggering event is not a pull request".to_string(),
        })?;
        let token = context.token.clone().ok_or_else(|| ReviewError::GitHubContext {
            reason: "No token available: pass --github-token or set GITHUB_TOKEN".to_string(),
        })?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("cargo-audit-review/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: context.reviews_url(pull_request),
            token,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ReviewPublisher for GitHubReviewPublisher {
    async fn publish(&self, review: &Review) -> Result<PublishedReview> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", Self::API_VERSION)
            .json(review)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(ReviewError::PublishError {
                status: status.as_u16(),
                details,
            }
            .into());
        }

        let created: CreatedReview = response.json().await?;
        Ok(PublishedReview {
            id: created.id,
            html_url: created.html_url,
        })
    }
}
