use super::classify::{classify, PersonalityType};
use super::insights::{dominant_trait, recommendations, Recommendation, TraitLevel};
use super::types::TraitScores;
use crate::catalog::{AssessmentMode, TraitCode};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Exportable assessment result.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AssessmentMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_version: Option<String>,
    /// Number of answers that contributed to the scores
    pub answered: usize,
    pub traits: TraitScores,
    pub levels: Vec<LevelEntry>,
    pub personality_type: TypeEntry,
    pub dominant_trait: TraitCode,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelEntry {
    pub trait_code: TraitCode,
    pub percentile: u8,
    pub level: TraitLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeEntry {
    pub kind: PersonalityType,
    pub label: &'static str,
    pub description: &'static str,
}

impl Report {
    pub fn build(
        scores: TraitScores,
        answered: usize,
        mode: Option<AssessmentMode>,
        catalog_version: Option<String>,
    ) -> Self {
        let kind = classify(&scores);
        let levels = scores
            .iter()
            .map(|s| LevelEntry {
                trait_code: s.trait_code,
                percentile: s.percentile,
                level: TraitLevel::from_percentile(s.percentile),
            })
            .collect();

        Self {
            mode,
            catalog_version,
            answered,
            traits: scores,
            levels,
            personality_type: TypeEntry {
                kind,
                label: kind.label(),
                description: kind.description(),
            },
            dominant_trait: dominant_trait(&scores),
            recommendations: recommendations(&scores),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_neutral_report() {
        let report = Report::build(TraitScores::neutral(), 0, None, None);
        assert_eq!(report.personality_type.kind, PersonalityType::Balanced);
        assert_eq!(report.levels.len(), 5);
        assert!(report
            .levels
            .iter()
            .all(|l| l.level == TraitLevel::Average));
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_report_json_shape() {
        let scores = TraitScores::from_percentiles(100, 50, 50, 50, 100).unwrap();
        let report = Report::build(
            scores,
            4,
            Some(AssessmentMode::Brief),
            Some("ipip-50".to_string()),
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mode"], "brief");
        assert_eq!(json["catalog_version"], "ipip-50");
        assert_eq!(json["answered"], 4);
        assert_eq!(json["traits"]["O"], 100);
        assert_eq!(json["traits"]["N"], 100);
        assert_eq!(json["personality_type"]["kind"], "sensitive_creative");
        assert_eq!(json["personality_type"]["label"], "The Sensitive Creative");
        assert_eq!(json["dominant_trait"], "O");
    }

    #[test]
    fn test_optional_fields_omitted() {
        let report = Report::build(TraitScores::neutral(), 0, None, None);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("mode").is_none());
        assert!(json.get("catalog_version").is_none());
    }
}
