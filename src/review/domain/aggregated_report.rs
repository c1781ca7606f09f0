use super::Finding;
use std::collections::HashMap;

/// Findings grouped by the direct dependency they are reachable through.
///
/// Direct dependencies keep the order in which they were first seen, and
/// findings keep the order they were pushed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedReport {
    entries: Vec<(String, Vec<Finding>)>,
    index: HashMap<String, usize>,
}

impl AggregatedReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finding under `direct_dependency`, creating the group on
    /// first use.
    ///
    /// Returns `false` without modifying the report when the same advisory
    /// and chain are already recorded for that dependency.
    pub fn push(&mut self, direct_dependency: &str, finding: Finding) -> bool {
        let position = match self.index.get(direct_dependency) {
            Some(&position) => position,
            None => {
                self.entries.push((direct_dependency.to_string(), Vec::new()));
                let position = self.entries.len() - 1;
                self.index.insert(direct_dependency.to_string(), position);
                position
            }
        };

        let findings = &mut self.entries[position].1;
        let duplicate = findings
            .iter()
            .any(|f| f.advisory.id == finding.advisory.id && f.chain == finding.chain);
        if duplicate {
            return false;
        }
        findings.push(finding);
        true
    }

    pub fn get(&self, direct_dependency: &str) -> Option<&[Finding]> {
        self.index
            .get(direct_dependency)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Finding])> {
        self.entries
            .iter()
            .map(|(dependency, findings)| (dependency.as_str(), findings.as_slice()))
    }

    pub fn direct_dependencies(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of direct dependencies with findings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.entries.iter().map(|(_, findings)| findings.len()).sum()
    }
}
