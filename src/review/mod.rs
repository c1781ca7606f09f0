/// Review domain - pure logic explaining how vulnerable crates are reachable
///
/// Nothing in this module performs I/O. The services fold an already-parsed
/// audit report and dependency graph into an aggregated report and render it
/// as a pull request review.
pub mod domain;
pub mod services;
