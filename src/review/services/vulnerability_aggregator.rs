use super::{ChainFilter, ChainResolver, ReverseDependencyIndex};
use crate::review::domain::{AggregatedReport, Chain, DependencyRecord, Finding, Vulnerability};
use std::collections::HashMap;

/// Progress callback receiving `(processed, total)` vulnerability counts
pub type AggregationProgress<'a> = &'a dyn Fn(usize, usize);

/// Filtered chains per vulnerable package name, scoped to one aggregation
#[derive(Debug, Default)]
struct ChainMemo {
    chains: HashMap<String, Vec<Chain>>,
}

impl ChainMemo {
    /// Cached chains for `package`, restricted to chains ending at it.
    fn lookup(&self, package: &str) -> Option<Vec<Chain>> {
        self.chains.get(package).map(|chains| {
            chains
                .iter()
                .filter(|chain| chain.vulnerable_package() == package)
                .cloned()
                .collect()
        })
    }

    fn store(&mut self, package: &str, chains: Vec<Chain>) {
        self.chains.insert(package.to_string(), chains);
    }
}

/// Fold state threaded through the vulnerability list
#[derive(Debug, Default)]
struct AggregationState {
    memo: ChainMemo,
    report: AggregatedReport,
}

/// VulnerabilityAggregator service grouping advisories by direct dependency
pub struct VulnerabilityAggregator;

impl VulnerabilityAggregator {
    /// Aggregates vulnerabilities into findings grouped by direct dependency.
    ///
    /// # Arguments
    /// * `vulnerabilities` - Audit entries, in report order
    /// * `records` - All packages of the dependency graph
    /// * `root` - The package whose manifest is reviewed
    pub fn aggregate(
        vulnerabilities: &[Vulnerability],
        records: &[DependencyRecord],
        root: &str,
    ) -> AggregatedReport {
        Self::aggregate_with_progress(vulnerabilities, records, root, &|_, _| {})
    }

    /// Same as [`aggregate`](Self::aggregate), calling `progress` after each
    /// vulnerability.
    pub fn aggregate_with_progress(
        vulnerabilities: &[Vulnerability],
        records: &[DependencyRecord],
        root: &str,
        progress: AggregationProgress<'_>,
    ) -> AggregatedReport {
        let index = ReverseDependencyIndex::new(records);
        let total = vulnerabilities.len();

        let state = vulnerabilities.iter().enumerate().fold(
            AggregationState::default(),
            |state, (position, vulnerability)| {
                let state = Self::step(state, vulnerability, &index, root);
                progress(position + 1, total);
                state
            },
        );

        state.report
    }

    fn step(
        mut state: AggregationState,
        vulnerability: &Vulnerability,
        index: &ReverseDependencyIndex<'_>,
        root: &str,
    ) -> AggregationState {
        let package = vulnerability.package_name();

        let chains = match state.memo.lookup(package) {
            Some(chains) => chains,
            None => {
                let resolved = ChainResolver::resolve_with_index(package, index, root);
                let chains = ChainFilter::filter_shortest(resolved);
                state.memo.store(package, chains.clone());
                chains
            }
        };

        for chain in chains {
            debug_assert_eq!(chain.vulnerable_package(), package);
            let direct_dependency = chain.direct_dependency().to_string();
            state.report.push(
                &direct_dependency,
                Finding::new(vulnerability.advisory.clone(), chain),
            );
        }

        state
    }
}
