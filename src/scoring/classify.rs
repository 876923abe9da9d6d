use super::types::TraitScores;
use crate::catalog::TraitCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Personality type derived from the five trait percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityType {
    SensitiveCreative,
    AnxiousAchiever,
    EmotionalReactor,
    Innovator,
    Collaborator,
    Supporter,
    Thinker,
    SteadyPerformer,
    SocialCatalyst,
    Explorer,
    Harmonizer,
    Balanced,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 12] = [
        PersonalityType::SensitiveCreative,
        PersonalityType::AnxiousAchiever,
        PersonalityType::EmotionalReactor,
        PersonalityType::Innovator,
        PersonalityType::Collaborator,
        PersonalityType::Supporter,
        PersonalityType::Thinker,
        PersonalityType::SteadyPerformer,
        PersonalityType::SocialCatalyst,
        PersonalityType::Explorer,
        PersonalityType::Harmonizer,
        PersonalityType::Balanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PersonalityType::SensitiveCreative => "The Sensitive Creative",
            PersonalityType::AnxiousAchiever => "The Anxious Achiever",
            PersonalityType::EmotionalReactor => "The Emotional Reactor",
            PersonalityType::Innovator => "The Innovator",
            PersonalityType::Collaborator => "The Collaborator",
            PersonalityType::Supporter => "The Supporter",
            PersonalityType::Thinker => "The Thinker",
            PersonalityType::SteadyPerformer => "The Steady Performer",
            PersonalityType::SocialCatalyst => "The Social Catalyst",
            PersonalityType::Explorer => "The Explorer",
            PersonalityType::Harmonizer => "The Harmonizer",
            PersonalityType::Balanced => "The Balanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PersonalityType::SensitiveCreative => "Highly creative and emotionally sensitive. You experience life intensely and channel emotions into innovative expression.",
            PersonalityType::AnxiousAchiever => "Driven and emotionally reactive. You set high standards for yourself and feel stress when things don't go as planned.",
            PersonalityType::EmotionalReactor => "Highly sensitive to stress and emotional stimuli. You experience emotions intensely and may need extra support managing anxiety.",
            PersonalityType::Innovator => "Outgoing and imaginative. You bring new ideas to people and energize others around fresh possibilities.",
            PersonalityType::Collaborator => "Outgoing and cooperative. You thrive in team environments and excel at building relationships.",
            PersonalityType::Supporter => "Reliable and caring. You are the backbone of any team, providing stability and support to others.",
            PersonalityType::Thinker => "Curious and disciplined. You pair deep thinking with the persistence to turn ideas into finished work.",
            PersonalityType::SteadyPerformer => "Organized, dependable, and consistent. You deliver steady results through planning and follow-through.",
            PersonalityType::SocialCatalyst => "Energetic and sociable. You draw people together and bring momentum to any group.",
            PersonalityType::Explorer => "Curious, adventurous, and open to new experiences. You seek knowledge and novel experiences.",
            PersonalityType::Harmonizer => "Warm and considerate. You look after the people around you and keep relationships running smoothly.",
            PersonalityType::Balanced => "You show a balanced mix of traits, adapting well to different situations and challenges.",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named threshold predicate over the five percentiles.
struct Rule {
    result: PersonalityType,
    matches: fn(&TraitScores) -> bool,
}

fn pct(scores: &TraitScores, code: TraitCode) -> u8 {
    scores.percentile(code)
}

// Order matters: later rules are only reached when every earlier one fails.
const RULES: [Rule; 11] = [
    Rule {
        result: PersonalityType::SensitiveCreative,
        matches: |s| pct(s, TraitCode::N) > 80 && pct(s, TraitCode::O) > 70,
    },
    Rule {
        result: PersonalityType::AnxiousAchiever,
        matches: |s| pct(s, TraitCode::N) > 80 && pct(s, TraitCode::C) > 70,
    },
    Rule {
        result: PersonalityType::EmotionalReactor,
        matches: |s| pct(s, TraitCode::N) > 80,
    },
    Rule {
        result: PersonalityType::Innovator,
        matches: |s| pct(s, TraitCode::E) > 75 && pct(s, TraitCode::O) > 75,
    },
    Rule {
        result: PersonalityType::Collaborator,
        matches: |s| pct(s, TraitCode::E) > 75 && pct(s, TraitCode::A) > 75,
    },
    Rule {
        result: PersonalityType::Supporter,
        matches: |s| pct(s, TraitCode::A) > 75 && pct(s, TraitCode::C) > 75,
    },
    Rule {
        result: PersonalityType::Thinker,
        matches: |s| pct(s, TraitCode::O) > 75 && pct(s, TraitCode::C) > 75,
    },
    Rule {
        result: PersonalityType::SteadyPerformer,
        matches: |s| pct(s, TraitCode::C) > 75,
    },
    Rule {
        result: PersonalityType::SocialCatalyst,
        matches: |s| pct(s, TraitCode::E) > 75,
    },
    Rule {
        result: PersonalityType::Explorer,
        matches: |s| pct(s, TraitCode::O) > 75,
    },
    Rule {
        result: PersonalityType::Harmonizer,
        matches: |s| pct(s, TraitCode::A) > 75,
    },
];

/// First matching rule wins; [`PersonalityType::Balanced`] when none match.
pub fn classify(scores: &TraitScores) -> PersonalityType {
    RULES
        .iter()
        .find(|rule| (rule.matches)(scores))
        .map(|rule| rule.result)
        .unwrap_or(PersonalityType::Balanced)
}
