use super::Advisory;

/// Path from a direct dependency of the root down to a vulnerable package.
///
/// Stored direct-dependency-first and vulnerable-package-last; the root
/// package itself is never part of a chain except for the single-element
/// chain describing a vulnerable root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain(Vec<String>);

impl Chain {
    /// Creates a chain from packages ordered direct dependency first.
    /// Returns `None` for an empty sequence.
    pub fn new(packages: Vec<String>) -> Option<Self> {
        if packages.is_empty() {
            None
        } else {
            Some(Self(packages))
        }
    }

    /// Converts an ancestry path `[vulnerable, parent, ..., terminus]` into a
    /// chain, provided its terminus is `root`.
    ///
    /// The root is trimmed and the remaining packages are reversed. A path
    /// made of the root alone yields `None`.
    pub fn from_ancestry_path(path: &[String], root: &str) -> Option<Self> {
        let (terminus, rest) = path.split_last()?;
        if terminus != root {
            return None;
        }
        Self::new(rest.iter().rev().cloned().collect())
    }

    /// Chain used when the root package itself is the vulnerable one.
    pub fn root_only(root: &str) -> Self {
        Self(vec![root.to_string()])
    }

    /// The package declared in the root manifest that pulls the chain in.
    pub fn direct_dependency(&self) -> &str {
        &self.0[0]
    }

    /// The vulnerable package at the far end of the chain.
    pub fn vulnerable_package(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn packages(&self) -> &[String] {
        &self.0
    }
}

/// One advisory paired with the chain explaining why it is reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub advisory: Advisory,
    pub chain: Chain,
}

impl Finding {
    pub fn new(advisory: Advisory, chain: Chain) -> Self {
        Self { advisory, chain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_ancestry_path_trims_root_and_reverses() {
        let chain = Chain::from_ancestry_path(&path(&["vuln", "inner", "mid", "app"]), "app").unwrap();
        assert_eq!(chain.packages(), &path(&["mid", "inner", "vuln"])[..]);
        assert_eq!(chain.direct_dependency(), "mid");
        assert_eq!(chain.vulnerable_package(), "vuln");
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_from_ancestry_path_other_terminus() {
        assert!(Chain::from_ancestry_path(&path(&["vuln", "orphan"]), "app").is_none());
    }

    #[test]
    fn test_from_ancestry_path_root_alone() {
        assert!(Chain::from_ancestry_path(&path(&["app"]), "app").is_none());
        assert!(Chain::from_ancestry_path(&[], "app").is_none());
    }

    #[test]
    fn test_direct_dependency_of_length_one_chain() {
        let chain = Chain::from_ancestry_path(&path(&["vuln", "app"]), "app").unwrap();
        assert_eq!(chain.direct_dependency(), "vuln");
        assert_eq!(chain.vulnerable_package(), "vuln");
    }

    #[test]
    fn test_root_only() {
        let chain = Chain::root_only("app");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.direct_dependency(), "app");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Chain::new(vec![]).is_none());
    }
}
