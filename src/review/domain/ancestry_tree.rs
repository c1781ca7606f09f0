/// Index of a node inside an [`AncestryTree`]
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
struct AncestryNode {
    name: String,
    parents: Vec<NodeId>,
}

/// Tree of "who depends on whom", rooted at a vulnerable package.
///
/// The children of a node are the packages that depend on it directly.
/// Nodes live in an arena so the tree can be grown and walked without
/// recursion; node `0` is always the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestryTree {
    nodes: Vec<AncestryNode>,
}

impl AncestryTree {
    pub const ROOT: NodeId = 0;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![AncestryNode {
                name: name.into(),
                parents: Vec::new(),
            }],
        }
    }

    /// Appends `name` as the next parent of `node` and returns the new node.
    pub fn add_parent(&mut self, node: NodeId, name: impl Into<String>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(AncestryNode {
            name: name.into(),
            parents: Vec::new(),
        });
        self.nodes[node].parents.push(id);
        id
    }

    pub fn name(&self, node: NodeId) -> &str {
        &self.nodes[node].name
    }

    pub fn parents(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].parents
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Flattens the tree into one path per leaf, each starting at the root.
    ///
    /// Paths come out in depth-first order with earlier parents first.
    pub fn paths(&self) -> Vec<Vec<String>> {
        let mut paths = Vec::new();
        let mut stack: Vec<(NodeId, Vec<String>)> = vec![(Self::ROOT, Vec::new())];

        while let Some((node, mut path)) = stack.pop() {
            path.push(self.name(node).to_string());
            let parents = self.parents(node);
            if parents.is_empty() {
                paths.push(path);
                continue;
            }
            // Reverse push keeps the first parent on top of the stack.
            for &parent in parents.iter().rev() {
                stack.push((parent, path.clone()));
            }
        }

        paths
    }
}
