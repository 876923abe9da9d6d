use serde::{Deserialize, Serialize};

/// Scoring configuration.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   unresolved: reject
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// What to do with an answer whose question id is not in the catalog
    #[serde(default)]
    pub unresolved: UnresolvedPolicy,
}

/// Handling of answers that reference an unknown question.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Drop the answer; it contributes to no trait
    #[default]
    Skip,
    /// Fail the whole scoring call, naming the question id
    Reject,
}
