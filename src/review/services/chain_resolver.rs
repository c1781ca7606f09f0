use super::ReverseDependencyIndex;
use crate::review::domain::ancestry_tree::NodeId;
use crate::review::domain::{AncestryTree, Chain, DependencyRecord};
use std::collections::HashSet;

/// ChainResolver service finding how a package is reachable from the root
///
/// This is a pure algorithm with no I/O operations.
pub struct ChainResolver;

impl ChainResolver {
    /// Resolves every acyclic chain from a direct dependency of `root` down to
    /// `target`.
    ///
    /// # Arguments
    /// * `target` - The vulnerable package name
    /// * `records` - All packages of the dependency graph
    /// * `root` - The package whose manifest is reviewed
    ///
    /// # Returns
    /// Chains ordered direct dependency first, in depth-first discovery order.
    /// Branches that never reach `root` are dropped.
    pub fn resolve(target: &str, records: &[DependencyRecord], root: &str) -> Vec<Chain> {
        if target == root {
            return vec![Chain::root_only(root)];
        }

        let index = ReverseDependencyIndex::new(records);
        Self::resolve_with_index(target, &index, root)
    }

    pub(crate) fn resolve_with_index(
        target: &str,
        index: &ReverseDependencyIndex<'_>,
        root: &str,
    ) -> Vec<Chain> {
        if target == root {
            return vec![Chain::root_only(root)];
        }

        Self::build_ancestry_tree(target, index)
            .paths()
            .iter()
            .filter_map(|path| Chain::from_ancestry_path(path, root))
            .collect()
    }

    /// Grows the ancestry tree of `target` with an explicit worklist.
    ///
    /// Each worklist entry carries its own copy of the packages visited on
    /// its path, so a package may show up on several branches but never
    /// twice on the same one.
    pub fn build_ancestry_tree(target: &str, index: &ReverseDependencyIndex<'_>) -> AncestryTree {
        let mut tree = AncestryTree::new(target);
        let mut visited = HashSet::new();
        visited.insert(target.to_string());

        let mut worklist: Vec<(NodeId, HashSet<String>)> = vec![(AncestryTree::ROOT, visited)];

        while let Some((node, visited)) = worklist.pop() {
            let name = tree.name(node).to_string();
            for parent in index.parents_of(&name, &visited) {
                let child = tree.add_parent(node, parent.name.as_str());
                let mut branch_visited = visited.clone();
                branch_visited.insert(parent.name.clone());
                worklist.push((child, branch_visited));
            }
        }

        tree
    }
}
