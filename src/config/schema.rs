use crate::catalog::AssessmentMode;
use crate::scoring::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// catalog: ~/assessments/questions.json
/// assessment:
///   mode: brief
///   min_answers: 10
/// scoring:
///   unresolved: reject
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Question catalog JSON file; the built-in IPIP catalog when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Session file; ~/.config/ocean-profile/session.json when unset
    #[serde(default)]
    pub session: Option<PathBuf>,

    #[serde(default)]
    pub assessment: Option<AssessmentConfig>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AssessmentConfig {
    /// Mode used by `start` and `questions` when none is given
    #[serde(default)]
    pub mode: AssessmentMode,

    /// Answers required before results are shown
    #[serde(default = "default_min_answers")]
    pub min_answers: usize,
}

fn default_min_answers() -> usize {
    5
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            mode: AssessmentMode::default(),
            min_answers: default_min_answers(),
        }
    }
}
