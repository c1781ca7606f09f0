/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod review_request;
mod review_response;

pub use output_format::OutputFormat;
pub use review_request::ReviewRequest;
pub use review_response::ReviewResponse;
