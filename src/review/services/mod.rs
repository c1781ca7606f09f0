mod chain_filter;
mod chain_resolver;
mod graph_builder;
pub mod manifest_line_locator;
mod report_renderer;
mod vulnerability_aggregator;

pub use chain_filter::ChainFilter;
pub use chain_resolver::ChainResolver;
pub use graph_builder::ReverseDependencyIndex;
pub use manifest_line_locator::{ManifestLineLocator, ManifestPatterns};
pub use report_renderer::{ReportRenderer, DEFAULT_ADVISORY_BASE_URL, DEFAULT_MANIFEST_FILE};
pub use vulnerability_aggregator::{AggregationProgress, VulnerabilityAggregator};
