//! Big Five (OCEAN) personality assessment.
//!
//! Answers on a 1..=5 Likert scale are reverse-scored where a question is
//! negatively keyed, averaged per trait, and rescaled onto 0..=100. The five
//! percentiles are then classified into a personality type by an ordered rule
//! table.
//!
//! ```
//! use ocean_profile::catalog::{Catalog, KeyedDirection, Question, TraitCode};
//! use ocean_profile::scoring::{classify, score, Answer, PersonalityType};
//!
//! let catalog = Catalog::new(None, vec![Question {
//!     id: 1,
//!     text: "I am full of ideas.".to_string(),
//!     trait_code: TraitCode::O,
//!     facet: None,
//!     keyed_direction: KeyedDirection::Positive,
//! }]);
//! let scores = score(&[Answer::new(1, 5)], &catalog).unwrap();
//! assert_eq!(scores.percentile(TraitCode::O), 100);
//! assert_eq!(classify(&scores), PersonalityType::Explorer);
//! ```

pub mod catalog;
pub mod config;
pub mod output;
pub mod scoring;
pub mod session;
