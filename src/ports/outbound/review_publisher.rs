use crate::review::domain::Review;
use crate::shared::Result;
use async_trait::async_trait;

/// Identity of a review accepted by the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedReview {
    pub id: u64,
    pub html_url: Option<String>,
}

/// ReviewPublisher port for submitting a review to a code-review service
#[async_trait]
pub trait ReviewPublisher: Send + Sync {
    /// Submits the review
    ///
    /// # Errors
    /// Returns an error if the request fails or the service rejects the review.
    async fn publish(&self, review: &Review) -> Result<PublishedReview>;
}
