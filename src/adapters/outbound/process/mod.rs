/// Process adapters running cargo subcommands
mod cargo_runner;

pub use cargo_runner::CargoCommandRunner;
