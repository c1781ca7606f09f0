/// Network adapters for the GitHub REST API
mod github_client;
mod github_context;

pub use github_client::GitHubReviewPublisher;
pub use github_context::{GitHubContext, DEFAULT_GITHUB_API_URL};
