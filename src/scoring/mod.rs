pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod insights;
pub mod report;
pub mod types;
pub mod validation;

pub use classify::{classify, PersonalityType};
pub use config::{ScoringConfig, UnresolvedPolicy};
pub use engine::{score, score_with, ScoreResult, TraitBreakdown};
pub use error::ScoringError;
pub use insights::{
    dominant_trait, progress_message, recommendations, trait_explanation, trait_insight,
    InsightBand, Recommendation, TraitInsight, TraitLevel, WelcomeMessage, WELCOME,
};
pub use report::Report;
pub use types::{
    Answer, TraitAggregate, TraitScore, TraitScores, MAX_RAW_VALUE, MIN_RAW_VALUE,
    NEUTRAL_PERCENTILE,
};
pub use validation::{unresolved_question_ids, validate_answers};
