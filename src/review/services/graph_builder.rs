use crate::review::domain::DependencyRecord;
use std::collections::{HashMap, HashSet};

/// Reverse adjacency over a flat dependency list, answering "who depends on X".
///
/// Borrowing the records keeps the index cheap to build per analysis run.
pub struct ReverseDependencyIndex<'a> {
    records: &'a [DependencyRecord],
    dependents: HashMap<&'a str, Vec<usize>>,
}

impl<'a> ReverseDependencyIndex<'a> {
    pub fn new(records: &'a [DependencyRecord]) -> Self {
        let mut dependents: HashMap<&'a str, Vec<usize>> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            for dependency in &record.dependencies {
                let entry = dependents.entry(dependency.name.as_str()).or_default();
                // A record listing the same dependency twice is still one parent.
                if entry.last() != Some(&position) {
                    entry.push(position);
                }
            }
        }

        Self {
            records,
            dependents,
        }
    }

    /// Returns every record depending on `name`, in record order, skipping
    /// records whose own name is in `excluding`.
    pub fn parents_of(&self, name: &str, excluding: &HashSet<String>) -> Vec<&'a DependencyRecord> {
        let records = self.records;
        self.dependents
            .get(name)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| &records[position])
                    .filter(|record| !excluding.contains(&record.name))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
