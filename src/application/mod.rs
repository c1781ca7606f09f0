/// Application layer - the review use case, its DTOs and factories
///
/// The use case drives the review services and reaches cargo, the
/// filesystem and the console only through outbound ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
