use crate::catalog::AssessmentMode;
use crate::scoring::{Answer, ScoringError, MAX_RAW_VALUE, MIN_RAW_VALUE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SESSION_VERSION: u32 = 1;

/// Everything the engine needs from an in-progress assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub mode: AssessmentMode,
    #[serde(default)]
    pub catalog_version: Option<String>,
    #[serde(default)]
    pub answers: Vec<Answer>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionSnapshot {
    pub fn new(mode: AssessmentMode, catalog_version: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            version: SESSION_VERSION,
            mode,
            catalog_version,
            answers: Vec::new(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Record an answer, replacing any earlier answer to the same question.
    ///
    /// A replaced answer keeps its original position. Any entered value
    /// off the 1..=5 scale is rejected, however large.
    pub fn record(&mut self, question_id: u32, raw_value: u32) -> Result<(), ScoringError> {
        let raw_value = u8::try_from(raw_value)
            .ok()
            .filter(|v| (MIN_RAW_VALUE..=MAX_RAW_VALUE).contains(v))
            .ok_or(ScoringError::InvalidRawValue {
                question_id,
                value: raw_value,
            })?;
        let answer = Answer::new(question_id, raw_value);

        match self.answers.iter_mut().find(|a| a.question_id == question_id) {
            Some(existing) => existing.raw_value = raw_value,
            None => self.answers.push(answer),
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Remove the answer to a question.
    /// Returns true if an answer was present.
    pub fn remove(&mut self, question_id: u32) -> bool {
        let before = self.answers.len();
        self.answers.retain(|a| a.question_id != question_id);
        let removed = self.answers.len() != before;
        if removed {
            self.updated_at = Utc::now();
        }
        removed
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_answered(&self, question_id: u32) -> bool {
        self.answers.iter().any(|a| a.question_id == question_id)
    }

    pub fn answer_for(&self, question_id: u32) -> Option<u8> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.raw_value)
    }

    /// Percentage of `total` questions answered, rounded.
    pub fn progress(&self, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        let pct = (self.answered() * 100 + total / 2) / total;
        pct.min(100) as u8
    }

    /// Whether enough questions are answered to submit:
    /// at least `min(min_answers, total)`.
    pub fn is_ready(&self, min_answers: usize, total: usize) -> bool {
        self.answered() >= min_answers.min(total)
    }
}
