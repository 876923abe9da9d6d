use super::error::ScoringError;
use crate::catalog::TraitCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest and highest points on the Likert scale.
pub const MIN_RAW_VALUE: u8 = 1;
pub const MAX_RAW_VALUE: u8 = 5;

/// Percentile reported for a trait with no contributing answers.
pub const NEUTRAL_PERCENTILE: u8 = 50;

/// One response to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: u32,
    pub raw_value: u8,
}

impl Answer {
    pub fn new(question_id: u32, raw_value: u8) -> Self {
        Self {
            question_id,
            raw_value,
        }
    }

    pub fn is_valid(&self) -> bool {
        (MIN_RAW_VALUE..=MAX_RAW_VALUE).contains(&self.raw_value)
    }
}

/// Running total of scored values for one trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraitAggregate {
    pub sum: u32,
    pub count: u32,
}

impl TraitAggregate {
    pub fn add(&mut self, scored: u32) {
        self.sum += scored;
        self.count += 1;
    }

    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }

    /// Rescale the 1..=5 average onto 0..=100.
    ///
    /// Equivalent to `round(((sum / count - 1) / 4) * 100)` with halves rounded
    /// up, computed in integers so that ties never depend on float error.
    /// An empty aggregate yields [`NEUTRAL_PERCENTILE`].
    pub fn percentile(&self) -> u8 {
        if self.count == 0 {
            return NEUTRAL_PERCENTILE;
        }
        let count = self.count as u64;
        let above_floor = (self.sum as u64).saturating_sub(count);
        let numerator = above_floor * 100;
        let denominator = 4 * count;
        let rounded = (2 * numerator + denominator) / (2 * denominator);
        rounded.min(100) as u8
    }
}

/// Percentile for a single trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    pub trait_code: TraitCode,
    pub percentile: u8,
}

/// Percentiles for all five traits.
///
/// Serialized as `{"O": 72, "C": 50, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<TraitCode, u8>",
    into = "BTreeMap<TraitCode, u8>"
)]
pub struct TraitScores {
    percentiles: [u8; 5],
}

/// Index into a per-trait array in OCEAN order.
pub(crate) fn trait_slot(code: TraitCode) -> usize {
    match code {
        TraitCode::O => 0,
        TraitCode::C => 1,
        TraitCode::E => 2,
        TraitCode::A => 3,
        TraitCode::N => 4,
    }
}

impl TraitScores {
    /// All five traits at the neutral midpoint.
    pub fn neutral() -> Self {
        Self {
            percentiles: [NEUTRAL_PERCENTILE; 5],
        }
    }

    /// Build from percentiles in OCEAN order, rejecting values above 100.
    pub fn from_percentiles(
        openness: u8,
        conscientiousness: u8,
        extraversion: u8,
        agreeableness: u8,
        neuroticism: u8,
    ) -> Result<Self, ScoringError> {
        let percentiles = [
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        ];
        for (code, &value) in TraitCode::ALL.iter().zip(percentiles.iter()) {
            if value > 100 {
                return Err(ScoringError::PercentileOutOfRange {
                    trait_code: *code,
                    value,
                });
            }
        }
        Ok(Self { percentiles })
    }

    pub(crate) fn from_aggregates(aggregates: &[TraitAggregate; 5]) -> Self {
        Self {
            percentiles: aggregates.map(|agg| agg.percentile()),
        }
    }

    pub fn percentile(&self, code: TraitCode) -> u8 {
        self.percentiles[trait_slot(code)]
    }

    pub fn get(&self, code: TraitCode) -> TraitScore {
        TraitScore {
            trait_code: code,
            percentile: self.percentile(code),
        }
    }

    /// Scores in OCEAN order.
    pub fn iter(&self) -> impl Iterator<Item = TraitScore> + '_ {
        TraitCode::ALL.into_iter().map(|code| self.get(code))
    }
}

impl Default for TraitScores {
    fn default() -> Self {
        Self::neutral()
    }
}

impl From<TraitScores> for BTreeMap<TraitCode, u8> {
    fn from(scores: TraitScores) -> Self {
        scores.iter().map(|s| (s.trait_code, s.percentile)).collect()
    }
}

impl TryFrom<BTreeMap<TraitCode, u8>> for TraitScores {
    type Error = ScoringError;

    fn try_from(map: BTreeMap<TraitCode, u8>) -> Result<Self, Self::Error> {
        let lookup = |code: TraitCode| {
            map.get(&code)
                .copied()
                .ok_or(ScoringError::MissingTrait(code))
        };
        TraitScores::from_percentiles(
            lookup(TraitCode::O)?,
            lookup(TraitCode::C)?,
            lookup(TraitCode::E)?,
            lookup(TraitCode::A)?,
            lookup(TraitCode::N)?,
        )
    }
}
