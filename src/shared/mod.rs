/// Shared kernel - error types, result alias and small helpers used across layers
pub mod error;
pub mod flags;
pub mod guarded_read;
pub mod result;

pub use result::Result;
