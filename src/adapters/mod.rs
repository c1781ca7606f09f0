/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// cargo subprocesses, the filesystem, the GitHub API and the console.
pub mod outbound;
