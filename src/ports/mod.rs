/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe the infrastructure the review use
/// case depends on. The CLI drives the use case directly.
pub mod outbound;
