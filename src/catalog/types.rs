use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One of the Big Five personality dimensions.
///
/// Serialized as its single-letter code (`"O"`, `"C"`, `"E"`, `"A"`, `"N"`),
/// which is how question files and exported results refer to traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraitCode {
    O,
    C,
    E,
    A,
    N,
}

impl TraitCode {
    /// All five traits in canonical OCEAN order.
    pub const ALL: [TraitCode; 5] = [
        TraitCode::O,
        TraitCode::C,
        TraitCode::E,
        TraitCode::A,
        TraitCode::N,
    ];

    /// Human-readable trait name ("Openness", ...)
    pub fn name(&self) -> &'static str {
        match self {
            TraitCode::O => "Openness",
            TraitCode::C => "Conscientiousness",
            TraitCode::E => "Extraversion",
            TraitCode::A => "Agreeableness",
            TraitCode::N => "Neuroticism",
        }
    }

    /// Lowercase key used in prose-oriented output ("openness", ...)
    pub fn key(&self) -> &'static str {
        match self {
            TraitCode::O => "openness",
            TraitCode::C => "conscientiousness",
            TraitCode::E => "extraversion",
            TraitCode::A => "agreeableness",
            TraitCode::N => "neuroticism",
        }
    }

    /// Parse a trait from its letter or its full name, case-insensitive.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        for code in TraitCode::ALL {
            if s.eq_ignore_ascii_case(code.letter()) || s.eq_ignore_ascii_case(code.key()) {
                return Ok(code);
            }
        }
        bail!("Unknown trait '{}': expected one of O, C, E, A, N", s)
    }

    pub fn letter(&self) -> &'static str {
        match self {
            TraitCode::O => "O",
            TraitCode::C => "C",
            TraitCode::E => "E",
            TraitCode::A => "A",
            TraitCode::N => "N",
        }
    }
}

impl fmt::Display for TraitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Whether a higher raw answer means more (`+`) or less (`-`) of the trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyedDirection {
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
}

impl KeyedDirection {
    /// Turn a raw 1..=5 answer into its scored value.
    ///
    /// Negatively-keyed items are reflected around the scale midpoint (`6 - raw`).
    /// Callers validate the range first; this never clamps.
    pub fn apply(&self, raw_value: u8) -> u32 {
        match self {
            KeyedDirection::Positive => raw_value as u32,
            KeyedDirection::Negative => 6 - raw_value as u32,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            KeyedDirection::Positive => "+",
            KeyedDirection::Negative => "-",
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(rename = "trait")]
    pub trait_code: TraitCode,
    /// Sub-label within the trait; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    pub keyed_direction: KeyedDirection,
}

/// Ordered, read-only collection of questions with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: Option<String>,
    questions: Vec<Question>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Build a catalog, keeping question order.
    ///
    /// When ids repeat, lookups resolve to the first occurrence;
    /// `validate_catalog` reports the duplicates.
    pub fn new(version: Option<String>, questions: Vec<Question>) -> Self {
        let mut index = HashMap::with_capacity(questions.len());
        for (pos, question) in questions.iter().enumerate() {
            if index.contains_key(&question.id) {
                tracing::warn!(id = question.id, "duplicate question id, keeping the first");
                continue;
            }
            index.insert(question.id, pos);
        }
        Self {
            version,
            questions,
            index,
        }
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.index.get(&id).map(|&pos| &self.questions[pos])
    }

    pub fn by_trait(&self, code: TraitCode) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.trait_code == code)
    }

    pub fn count_for(&self, code: TraitCode) -> usize {
        self.by_trait(code).count()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, trait_code: TraitCode, keyed_direction: KeyedDirection) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            trait_code,
            facet: None,
            keyed_direction,
        }
    }

    #[test]
    fn test_positive_keying_keeps_raw_value() {
        for raw in 1..=5 {
            assert_eq!(KeyedDirection::Positive.apply(raw), raw as u32);
        }
    }

    #[test]
    fn test_negative_keying_reflects_raw_value() {
        for raw in 1..=5 {
            assert_eq!(KeyedDirection::Negative.apply(raw), 6 - raw as u32);
        }
        assert_eq!(
            KeyedDirection::Positive.apply(1),
            KeyedDirection::Negative.apply(5)
        );
        assert_eq!(
            KeyedDirection::Positive.apply(5),
            KeyedDirection::Negative.apply(1)
        );
    }

    #[test]
    fn test_trait_parse_letter_and_name() {
        assert_eq!(TraitCode::parse("o").unwrap(), TraitCode::O);
        assert_eq!(TraitCode::parse("Neuroticism").unwrap(), TraitCode::N);
        assert_eq!(TraitCode::parse(" E ").unwrap(), TraitCode::E);
        assert!(TraitCode::parse("X").is_err());
    }

    #[test]
    fn test_question_json_field_names() {
        let json = r#"{"id": 7, "text": "I am the life of the party.", "trait": "E", "facet": "Friendliness", "keyed_direction": "+"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 7);
        assert_eq!(q.trait_code, TraitCode::E);
        assert_eq!(q.keyed_direction, KeyedDirection::Positive);
        assert_eq!(q.facet.as_deref(), Some("Friendliness"));
    }

    #[test]
    fn test_question_without_facet() {
        let json = r#"{"id": 1, "text": "I worry about things.", "trait": "N", "keyed_direction": "-"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.facet.is_none());
        assert_eq!(q.keyed_direction, KeyedDirection::Negative);
    }

    #[test]
    fn test_catalog_lookup_and_counts() {
        let catalog = Catalog::new(
            Some("test".to_string()),
            vec![
                question(1, TraitCode::O, KeyedDirection::Positive),
                question(2, TraitCode::O, KeyedDirection::Negative),
                question(3, TraitCode::N, KeyedDirection::Positive),
            ],
        );
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.version(), Some("test"));
        assert_eq!(catalog.get(3).unwrap().trait_code, TraitCode::N);
        assert!(catalog.get(99).is_none());
        assert_eq!(catalog.count_for(TraitCode::O), 2);
        assert_eq!(catalog.count_for(TraitCode::C), 0);
    }

    #[test]
    fn test_catalog_duplicate_id_resolves_to_first() {
        let catalog = Catalog::new(
            None,
            vec![
                question(1, TraitCode::O, KeyedDirection::Positive),
                question(1, TraitCode::N, KeyedDirection::Negative),
            ],
        );
        assert_eq!(catalog.get(1).unwrap().trait_code, TraitCode::O);
    }
}
