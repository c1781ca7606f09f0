use crate::shared::error::ReviewError;
use crate::shared::Result;
use serde::Deserialize;

/// Reference from a package to one of its declared dependencies
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyRef {
    pub name: String,
}

/// One package of the dependency graph with the names it depends on directly.
///
/// Records are not unique by name: `cargo metadata` lists every resolved
/// version separately and each record is treated as its own node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<DependencyRef>,
}

impl DependencyRecord {
    pub fn new(name: impl Into<String>, dependencies: &[&str]) -> Self {
        Self {
            name: name.into(),
            dependencies: dependencies
                .iter()
                .map(|dep| DependencyRef {
                    name: (*dep).to_string(),
                })
                .collect(),
        }
    }

    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|dep| dep.name == name)
    }
}

/// Subset of `cargo metadata --format-version=1` output consumed by the review
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CargoMetadata {
    #[serde(default)]
    pub packages: Vec<DependencyRecord>,
}

impl CargoMetadata {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            ReviewError::MetadataParseError {
                details: e.to_string(),
            }
            .into()
        })
    }
}
