use crate::catalog::TraitCode;

/// Errors raised by the scoring engine.
///
/// Scoring either returns a complete five-trait result or one of these;
/// it never exposes a partially aggregated result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("Answer to question {question_id} has value {value}; expected 1 to 5")]
    InvalidRawValue { question_id: u32, value: u32 },

    #[error("Answer references question {question_id}, which is not in the catalog")]
    UnresolvedQuestion { question_id: u32 },

    #[error("Percentile {value} for trait {trait_code} is outside 0 to 100")]
    PercentileOutOfRange { trait_code: TraitCode, value: u8 },

    #[error("Missing percentile for trait {0}")]
    MissingTrait(TraitCode),
}
