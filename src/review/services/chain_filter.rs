use crate::review::domain::Chain;
use std::collections::HashMap;

/// ChainFilter service discarding redundant, longer explanations
pub struct ChainFilter;

impl ChainFilter {
    /// Keeps the shortest chain per direct dependency.
    ///
    /// Ties keep the chain seen first. The result is ordered by the first
    /// appearance of each direct dependency in `chains`.
    pub fn filter_shortest(chains: Vec<Chain>) -> Vec<Chain> {
        let mut shortest: Vec<Chain> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for chain in chains {
            match positions.get(chain.direct_dependency()) {
                Some(&position) => {
                    if chain.len() < shortest[position].len() {
                        shortest[position] = chain;
                    }
                }
                None => {
                    positions.insert(chain.direct_dependency().to_string(), shortest.len());
                    shortest.push(chain);
                }
            }
        }

        shortest
    }
}
