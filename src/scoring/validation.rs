use super::error::ScoringError;
use super::types::Answer;
use crate::catalog::Catalog;

/// Check every raw value lies on the 1..=5 scale.
///
/// Reports the first offending answer in input order. Out-of-range values are
/// never clamped.
pub fn validate_answers(answers: &[Answer]) -> Result<(), ScoringError> {
    match answers.iter().find(|a| !a.is_valid()) {
        Some(bad) => Err(ScoringError::InvalidRawValue {
            question_id: bad.question_id,
            value: u32::from(bad.raw_value),
        }),
        None => Ok(()),
    }
}

/// Question ids referenced by `answers` that the catalog does not contain,
/// in input order.
pub fn unresolved_question_ids(answers: &[Answer], catalog: &Catalog) -> Vec<u32> {
    answers
        .iter()
        .filter(|a| catalog.get(a.question_id).is_none())
        .map(|a| a.question_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{KeyedDirection, Question, TraitCode};

    #[test]
    fn test_valid_answers() {
        let answers = vec![Answer::new(1, 1), Answer::new(2, 3), Answer::new(3, 5)];
        assert!(validate_answers(&answers).is_ok());
    }

    #[test]
    fn test_empty_answers_are_valid() {
        assert!(validate_answers(&[]).is_ok());
    }

    #[test]
    fn test_reports_first_invalid_answer() {
        let answers = vec![Answer::new(1, 3), Answer::new(2, 0), Answer::new(3, 9)];
        let err = validate_answers(&answers).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidRawValue {
                question_id: 2,
                value: 0
            }
        );
    }

    #[test]
    fn test_unresolved_ids() {
        let catalog = Catalog::new(
            None,
            vec![Question {
                id: 1,
                text: "I like order.".to_string(),
                trait_code: TraitCode::C,
                facet: None,
                keyed_direction: KeyedDirection::Positive,
            }],
        );
        let answers = vec![Answer::new(7, 3), Answer::new(1, 3), Answer::new(8, 2)];
        assert_eq!(unresolved_question_ids(&answers, &catalog), vec![7, 8]);
    }
}
