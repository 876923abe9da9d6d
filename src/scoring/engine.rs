use super::config::{ScoringConfig, UnresolvedPolicy};
use super::error::ScoringError;
use super::types::{trait_slot, Answer, TraitAggregate, TraitScores};
use super::validation::{unresolved_question_ids, validate_answers};
use crate::catalog::{Catalog, TraitCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitBreakdown {
    pub trait_code: TraitCode,
    pub aggregate: TraitAggregate,
    pub percentile: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub scores: TraitScores,
    /// Question ids of answers dropped because the catalog lacks them
    pub skipped: Vec<u32>,
    /// Per-trait totals in OCEAN order
    pub breakdown: Vec<TraitBreakdown>,
}

/// Score answers with the default configuration (unknown questions skipped).
pub fn score(answers: &[Answer], catalog: &Catalog) -> Result<TraitScores, ScoringError> {
    score_with(answers, catalog, &ScoringConfig::default()).map(|result| result.scores)
}

/// Turn a set of answers into five trait percentiles.
///
/// Aggregates are rebuilt on every call, so the result depends only on the
/// arguments. Input is checked in full before anything is aggregated: an
/// out-of-range answer, or an unknown question under
/// [`UnresolvedPolicy::Reject`], fails the call with no partial result.
pub fn score_with(
    answers: &[Answer],
    catalog: &Catalog,
    config: &ScoringConfig,
) -> Result<ScoreResult, ScoringError> {
    validate_answers(answers)?;

    let unresolved = unresolved_question_ids(answers, catalog);
    if config.unresolved == UnresolvedPolicy::Reject {
        if let Some(&question_id) = unresolved.first() {
            return Err(ScoringError::UnresolvedQuestion { question_id });
        }
    }

    let mut aggregates = [TraitAggregate::default(); 5];
    for answer in answers {
        let Some(question) = catalog.get(answer.question_id) else {
            tracing::debug!(
                question_id = answer.question_id,
                "skipping answer to unknown question"
            );
            continue;
        };
        let scored = question.keyed_direction.apply(answer.raw_value);
        aggregates[trait_slot(question.trait_code)].add(scored);
    }

    let scores = TraitScores::from_aggregates(&aggregates);
    let breakdown = TraitCode::ALL
        .into_iter()
        .map(|code| {
            let aggregate = aggregates[trait_slot(code)];
            tracing::debug!(
                trait_code = %code,
                sum = aggregate.sum,
                count = aggregate.count,
                percentile = scores.percentile(code),
                "trait aggregate"
            );
            TraitBreakdown {
                trait_code: code,
                aggregate,
                percentile: scores.percentile(code),
            }
        })
        .collect();

    Ok(ScoreResult {
        scores,
        skipped: unresolved,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{KeyedDirection, Question};
    use proptest::prelude::*;

    fn question(id: u32, trait_code: TraitCode, keyed_direction: KeyedDirection) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            trait_code,
            facet: None,
            keyed_direction,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            None,
            vec![
                question(1, TraitCode::O, KeyedDirection::Positive),
                question(2, TraitCode::O, KeyedDirection::Positive),
                question(3, TraitCode::N, KeyedDirection::Negative),
                question(4, TraitCode::N, KeyedDirection::Negative),
                question(5, TraitCode::C, KeyedDirection::Positive),
                question(6, TraitCode::C, KeyedDirection::Negative),
            ],
        )
    }

    #[test]
    fn test_no_answers_is_neutral() {
        let scores = score(&[], &sample_catalog()).unwrap();
        assert_eq!(scores, TraitScores::neutral());
    }

    #[test]
    fn test_no_answers_empty_catalog_is_neutral() {
        let scores = score(&[], &Catalog::new(None, vec![])).unwrap();
        for s in scores.iter() {
            assert_eq!(s.percentile, 50);
        }
    }

    #[test]
    fn test_positive_and_reversed_answers() {
        let answers = vec![
            Answer::new(1, 5),
            Answer::new(2, 5),
            Answer::new(3, 1),
            Answer::new(4, 1),
        ];
        let scores = score(&answers, &sample_catalog()).unwrap();
        assert_eq!(scores.percentile(TraitCode::O), 100);
        assert_eq!(scores.percentile(TraitCode::N), 100);
        assert_eq!(scores.percentile(TraitCode::C), 50);
        assert_eq!(scores.percentile(TraitCode::E), 50);
        assert_eq!(scores.percentile(TraitCode::A), 50);
    }

    #[test]
    fn test_mixed_keying_within_trait() {
        // C: +4 and reversed 2 -> 4 + 4 = 8 over 2 -> average 4 -> 75
        let answers = vec![Answer::new(5, 4), Answer::new(6, 2)];
        let scores = score(&answers, &sample_catalog()).unwrap();
        assert_eq!(scores.percentile(TraitCode::C), 75);
    }

    #[test]
    fn test_unknown_question_skipped_by_default() {
        let answers = vec![Answer::new(1, 1), Answer::new(42, 5)];
        let result = score_with(&answers, &sample_catalog(), &ScoringConfig::default()).unwrap();
        assert_eq!(result.skipped, vec![42]);
        assert_eq!(result.scores.percentile(TraitCode::O), 0);
        let total: u32 = result.breakdown.iter().map(|b| b.aggregate.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_unknown_question_rejected_when_configured() {
        let answers = vec![Answer::new(1, 1), Answer::new(42, 5)];
        let config = ScoringConfig {
            unresolved: UnresolvedPolicy::Reject,
        };
        let err = score_with(&answers, &sample_catalog(), &config).unwrap_err();
        assert_eq!(err, ScoringError::UnresolvedQuestion { question_id: 42 });
    }

    #[test]
    fn test_invalid_raw_value_rejected() {
        let answers = vec![Answer::new(1, 4), Answer::new(3, 6)];
        let err = score(&answers, &sample_catalog()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidRawValue {
                question_id: 3,
                value: 6
            }
        );
    }

    #[test]
    fn test_invalid_value_on_unknown_question_still_rejected() {
        // Range check happens before reference resolution
        let answers = vec![Answer::new(99, 0)];
        let err = score(&answers, &sample_catalog()).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidRawValue { question_id: 99, .. }));
    }

    #[test]
    fn test_breakdown_in_ocean_order() {
        let answers = vec![Answer::new(1, 4)];
        let result = score_with(&answers, &sample_catalog(), &ScoringConfig::default()).unwrap();
        let codes: Vec<_> = result.breakdown.iter().map(|b| b.trait_code).collect();
        assert_eq!(codes, TraitCode::ALL.to_vec());
        assert_eq!(result.breakdown[0].aggregate, TraitAggregate { sum: 4, count: 1 });
        assert_eq!(result.breakdown[0].percentile, 75);
    }

    #[test]
    fn test_answer_order_does_not_matter() {
        let forward = vec![Answer::new(1, 2), Answer::new(2, 5), Answer::new(3, 3)];
        let mut backward = forward.clone();
        backward.reverse();
        let catalog = sample_catalog();
        assert_eq!(
            score(&forward, &catalog).unwrap(),
            score(&backward, &catalog).unwrap()
        );
    }

    // One question per generated answer, so trait and keying vary freely
    fn arb_answered_items() -> impl Strategy<Value = Vec<(usize, bool, u8)>> {
        prop::collection::vec((0usize..5, any::<bool>(), 1u8..=5), 0..40)
    }

    fn build(items: &[(usize, bool, u8)]) -> (Vec<Answer>, Catalog) {
        let mut questions = Vec::with_capacity(items.len());
        let mut answers = Vec::with_capacity(items.len());
        for (i, &(trait_idx, positive, raw)) in items.iter().enumerate() {
            let id = i as u32 + 1;
            let direction = if positive {
                KeyedDirection::Positive
            } else {
                KeyedDirection::Negative
            };
            questions.push(question(id, TraitCode::ALL[trait_idx], direction));
            answers.push(Answer::new(id, raw));
        }
        (answers, Catalog::new(None, questions))
    }

    proptest! {
        #[test]
        fn percentiles_always_in_range(items in arb_answered_items()) {
            let (answers, catalog) = build(&items);
            let scores = score(&answers, &catalog).unwrap();
            for s in scores.iter() {
                prop_assert!(s.percentile <= 100);
            }
        }

        #[test]
        fn scoring_is_idempotent(items in arb_answered_items()) {
            let (answers, catalog) = build(&items);
            let first = score_with(&answers, &catalog, &ScoringConfig::default()).unwrap();
            let second = score_with(&answers, &catalog, &ScoringConfig::default()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn raising_positive_answer_never_lowers_percentile(
            items in arb_answered_items(),
            trait_idx in 0usize..5,
            raw in 1u8..5,
            bump in 1u8..5,
        ) {
            let (mut answers, catalog) = build(&items);
            let mut questions = catalog.questions().to_vec();
            let id = questions.len() as u32 + 1;
            questions.push(question(id, TraitCode::ALL[trait_idx], KeyedDirection::Positive));
            let catalog = Catalog::new(None, questions);

            answers.push(Answer::new(id, raw));
            let before = score(&answers, &catalog).unwrap();

            let raised = (raw + bump).min(5);
            if let Some(last) = answers.last_mut() {
                last.raw_value = raised;
            }
            let after = score(&answers, &catalog).unwrap();

            let code = TraitCode::ALL[trait_idx];
            prop_assert!(after.percentile(code) >= before.percentile(code));
        }

        #[test]
        fn reversed_answer_mirrors_positive_answer(trait_idx in 0usize..5, raw in 1u8..=5) {
            let code = TraitCode::ALL[trait_idx];
            let positive = Catalog::new(None, vec![question(1, code, KeyedDirection::Positive)]);
            let negative = Catalog::new(None, vec![question(1, code, KeyedDirection::Negative)]);

            let forward = score(&[Answer::new(1, raw)], &positive).unwrap();
            let mirrored = score(&[Answer::new(1, 6 - raw)], &negative).unwrap();
            prop_assert_eq!(forward, mirrored);
        }

        #[test]
        fn out_of_range_values_always_rejected(raw in prop_oneof![Just(0u8), 6u8..=255]) {
            let catalog = sample_catalog();
            let result = score(&[Answer::new(1, raw)], &catalog);
            let is_invalid = matches!(result, Err(ScoringError::InvalidRawValue { .. }));
            prop_assert!(is_invalid);
        }
    }
}
