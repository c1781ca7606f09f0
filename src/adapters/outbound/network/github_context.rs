use crate::shared::error::ReviewError;
use crate::shared::guarded_read::read_guarded_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct GitHubEvent {
    #[serde(default)]
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    number: u64,
}

/// Repository and pull request the review is published to
///
/// Built from the environment GitHub Actions provides to every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubContext {
    pub api_url: String,
    pub owner: String,
    pub repository: String,
    /// `None` when the triggering event is not a pull request
    pub pull_request: Option<u64>,
    pub token: Option<String>,
}

impl GitHubContext {
    /// Reads `GITHUB_REPOSITORY`, `GITHUB_EVENT_PATH`, `GITHUB_API_URL` and
    /// `GITHUB_TOKEN`. An explicit `token` wins over `GITHUB_TOKEN`.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), token)
    }

    pub fn from_lookup<F>(lookup: F, token: Option<String>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slug = lookup("GITHUB_REPOSITORY").ok_or_else(|| ReviewError::GitHubContext {
            reason: "GITHUB_REPOSITORY is not set".to_string(),
        })?;
        let (owner, repository) = slug
            .split_once('/')
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
            .ok_or_else(|| ReviewError::GitHubContext {
                reason: format!("GITHUB_REPOSITORY must look like owner/repo, got '{}'", slug),
            })?;

        let event_path = lookup("GITHUB_EVENT_PATH").ok_or_else(|| ReviewError::GitHubContext {
            reason: "GITHUB_EVENT_PATH is not set".to_string(),
        })?;
        let pull_request = Self::read_pull_request_number(Path::new(&event_path))?;

        let api_url = lookup("GITHUB_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repository: repository.to_string(),
            pull_request,
            token: token
                .or_else(|| lookup("GITHUB_TOKEN"))
                .filter(|t| !t.is_empty()),
        })
    }

    fn read_pull_request_number(event_path: &Path) -> Result<Option<u64>> {
        let content = read_guarded_file(event_path, "GitHub event payload")?;
        let event: GitHubEvent =
            serde_json::from_str(&content).map_err(|e| ReviewError::GitHubContext {
                reason: format!("Failed to parse event payload: {}", e),
            })?;
        Ok(event.pull_request.map(|pr| pr.number))
    }

    /// `{api}/repos/{owner}/{repo}/pulls/{number}/reviews`
    pub fn reviews_url(&self, pull_request: u64) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}/reviews",
            self.api_url,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repository),
            pull_request
        )
    }
}
