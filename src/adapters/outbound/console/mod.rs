/// Console adapters reporting progress on stderr
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
