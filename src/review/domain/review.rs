use serde::Serialize;
use std::fmt;

/// Overall outcome of the review.
///
/// Serializes to the event names of the GitHub pull request reviews API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "APPROVE")]
    Approve,
    #[serde(rename = "REQUEST_CHANGES")]
    ChangesRequested,
}

impl Verdict {
    pub fn from_vulnerabilities_found(found: bool) -> Self {
        if found {
            Verdict::ChangesRequested
        } else {
            Verdict::Approve
        }
    }

    pub fn requests_changes(self) -> bool {
        matches!(self, Verdict::ChangesRequested)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Approve => write!(f, "approved"),
            Verdict::ChangesRequested => write!(f, "changes requested"),
        }
    }
}

/// Annotation anchored to one line of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewComment {
    pub path: String,
    /// 1-based line number
    pub line: usize,
    pub body: String,
}

/// Rendered pull request review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    #[serde(rename = "event")]
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<ReviewComment>,
}

impl Review {
    pub fn approved() -> Self {
        Self {
            verdict: Verdict::Approve,
            body: None,
            comments: Vec::new(),
        }
    }
}
