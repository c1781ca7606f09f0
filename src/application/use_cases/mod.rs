/// Use cases module containing application business logic orchestration
mod review_audit;

pub use review_audit::ReviewAuditUseCase;
