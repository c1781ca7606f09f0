use crate::review::domain::Review;
use crate::shared::Result;

/// ReviewFormatter port for rendering a review for local output
pub trait ReviewFormatter {
    /// Formats the review
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, review: &Review) -> Result<String>;
}
