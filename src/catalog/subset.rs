use super::types::{Catalog, KeyedDirection, Question, TraitCode};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assessment length. Shorter modes take a balanced subset of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentMode {
    Brief,
    Standard,
    #[default]
    Complete,
}

/// Static description of an assessment mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeInfo {
    pub name: &'static str,
    pub duration: &'static str,
    /// `None` means every catalog item is used
    pub items_per_trait: Option<usize>,
    pub description: &'static str,
    pub reliability: &'static str,
}

// Trait order used when building a subset
const SELECTION_ORDER: [TraitCode; 5] = [
    TraitCode::N,
    TraitCode::E,
    TraitCode::O,
    TraitCode::A,
    TraitCode::C,
];

impl AssessmentMode {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brief" => Ok(AssessmentMode::Brief),
            "standard" => Ok(AssessmentMode::Standard),
            "complete" => Ok(AssessmentMode::Complete),
            other => bail!(
                "Unknown assessment mode '{}': expected brief, standard or complete",
                other
            ),
        }
    }

    pub fn info(&self) -> ModeInfo {
        match self {
            AssessmentMode::Brief => ModeInfo {
                name: "Brief Assessment",
                duration: "3 minutes",
                items_per_trait: Some(4),
                description: "Quick overview of your personality profile",
                reliability: "This overview provides a general indication of your personality traits. Results may vary with a more comprehensive assessment.",
            },
            AssessmentMode::Standard => ModeInfo {
                name: "Standard Assessment",
                duration: "7 minutes",
                items_per_trait: Some(12),
                description: "Balanced depth and efficiency",
                reliability: "This assessment provides reliable insights into your personality patterns and behavioral tendencies.",
            },
            AssessmentMode::Complete => ModeInfo {
                name: "Comprehensive Assessment",
                duration: "12-15 minutes",
                items_per_trait: None,
                description: "Full detailed analysis with maximum precision",
                reliability: "This assessment provides highly reliable and detailed insights with maximum precision.",
            },
        }
    }
}

impl fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssessmentMode::Brief => "brief",
            AssessmentMode::Standard => "standard",
            AssessmentMode::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// Pick the questions presented for `mode`.
///
/// Brief and standard modes take, per trait, the first `ceil(k/2)` positively
/// keyed and first `floor(k/2)` negatively keyed items in catalog order. A trait
/// with too few items of one keying contributes fewer questions. Complete mode
/// returns the catalog unchanged. Question ids are never renumbered.
pub fn select_questions(mode: AssessmentMode, catalog: &Catalog) -> Vec<Question> {
    let Some(per_trait) = mode.info().items_per_trait else {
        return catalog.questions().to_vec();
    };

    let positive_count = per_trait.div_ceil(2);
    let negative_count = per_trait / 2;

    let mut selected = Vec::with_capacity(per_trait * SELECTION_ORDER.len());
    for code in SELECTION_ORDER {
        selected.extend(
            catalog
                .by_trait(code)
                .filter(|q| q.keyed_direction == KeyedDirection::Positive)
                .take(positive_count)
                .cloned(),
        );
        selected.extend(
            catalog
                .by_trait(code)
                .filter(|q| q.keyed_direction == KeyedDirection::Negative)
                .take(negative_count)
                .cloned(),
        );
    }
    selected
}
