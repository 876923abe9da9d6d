//! Static interpretation tables keyed on trait percentiles.

use super::types::TraitScores;
use crate::catalog::TraitCode;
use serde::Serialize;

/// Five-step descriptive level for a percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitLevel {
    VeryHigh,
    High,
    Average,
    Low,
    VeryLow,
}

impl TraitLevel {
    pub fn from_percentile(percentile: u8) -> Self {
        match percentile {
            80.. => TraitLevel::VeryHigh,
            60..=79 => TraitLevel::High,
            40..=59 => TraitLevel::Average,
            20..=39 => TraitLevel::Low,
            _ => TraitLevel::VeryLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TraitLevel::VeryHigh => "Very High",
            TraitLevel::High => "High",
            TraitLevel::Average => "Average",
            TraitLevel::Low => "Low",
            TraitLevel::VeryLow => "Very Low",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TraitLevel::VeryHigh => "Significantly above average",
            TraitLevel::High => "Above average",
            TraitLevel::Average => "Typical range",
            TraitLevel::Low => "Below average",
            TraitLevel::VeryLow => "Significantly below average",
        }
    }
}

/// Three-way band used to pick trait insight prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightBand {
    High,
    Medium,
    Low,
}

impl InsightBand {
    pub fn from_percentile(percentile: u8) -> Self {
        match percentile {
            70.. => InsightBand::High,
            30..=69 => InsightBand::Medium,
            _ => InsightBand::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitInsight {
    pub description: &'static str,
    pub strengths: [&'static str; 4],
    pub growth: [&'static str; 4],
    pub career: &'static str,
}

static NEUROTICISM: [TraitInsight; 3] = [
    TraitInsight {
        description: "You experience emotions intensely and may be more sensitive to stress. This emotional depth can be a source of creativity and empathy.",
        strengths: ["Deep emotional awareness", "High empathy", "Creative sensitivity", "Authentic expression"],
        growth: ["Stress management techniques", "Mindfulness practices", "Emotional regulation skills", "Building resilience"],
        career: "Consider roles that value emotional intelligence: counseling, creative arts, human resources, or research.",
    },
    TraitInsight {
        description: "You maintain a balanced emotional state, experiencing both stability and appropriate emotional responses to situations.",
        strengths: ["Emotional balance", "Adaptability", "Realistic outlook", "Steady performance"],
        growth: ["Developing emotional vocabulary", "Stress prevention", "Building confidence", "Assertiveness training"],
        career: "Your emotional stability suits many fields: management, education, healthcare, or business.",
    },
    TraitInsight {
        description: "You tend to remain calm under pressure and maintain emotional stability. You're resilient in the face of challenges.",
        strengths: ["Emotional stability", "Stress resilience", "Calm decision-making", "Consistent performance"],
        growth: ["Emotional awareness", "Empathy development", "Recognizing others' emotions", "Vulnerability in relationships"],
        career: "Your stability is valuable in high-pressure roles: emergency services, leadership, finance, or operations.",
    },
];

static EXTRAVERSION: [TraitInsight; 3] = [
    TraitInsight {
        description: "You're energized by social interaction and tend to be outgoing, assertive, and enthusiastic in your approach to life.",
        strengths: ["Natural leadership", "Strong communication", "Team motivation", "Networking abilities"],
        growth: ["Active listening", "Solitude appreciation", "Depth over breadth", "Patience with introverts"],
        career: "Thrive in people-focused roles: sales, marketing, public relations, teaching, or management.",
    },
    TraitInsight {
        description: "You're comfortable in both social and solitary situations, adapting your energy to the context and people around you.",
        strengths: ["Social flexibility", "Balanced communication", "Adaptable leadership", "Versatile networking"],
        growth: ["Developing consistent style", "Building deeper relationships", "Public speaking", "Team dynamics"],
        career: "Your versatility fits many roles: project management, consulting, research, or customer service.",
    },
    TraitInsight {
        description: "You prefer quieter environments and smaller groups, often doing your best thinking and work independently.",
        strengths: ["Deep focus", "Independent work", "Thoughtful analysis", "Quality relationships"],
        growth: ["Public speaking", "Networking skills", "Team collaboration", "Assertiveness"],
        career: "Excel in focused roles: research, writing, technical work, analysis, or specialized expertise.",
    },
];

static OPENNESS: [TraitInsight; 3] = [
    TraitInsight {
        description: "You're intellectually curious, creative, and open to new experiences. You enjoy exploring ideas and possibilities.",
        strengths: ["Creative thinking", "Innovation", "Learning agility", "Cultural appreciation"],
        growth: ["Practical application", "Follow-through", "Detail attention", "Routine acceptance"],
        career: "Flourish in creative fields: design, research, arts, innovation, or strategic planning.",
    },
    TraitInsight {
        description: "You balance appreciation for new ideas with practical considerations, being selectively open to experiences.",
        strengths: ["Balanced perspective", "Practical creativity", "Selective learning", "Measured risk-taking"],
        growth: ["Expanding comfort zone", "Creative exploration", "Intellectual curiosity", "Cultural exposure"],
        career: "Suit balanced roles: education, business development, product management, or consulting.",
    },
    TraitInsight {
        description: "You prefer familiar approaches and practical solutions, valuing tradition and proven methods over novelty.",
        strengths: ["Practical focus", "Reliable methods", "Attention to detail", "Consistent execution"],
        growth: ["Embracing change", "Creative thinking", "New perspectives", "Innovation appreciation"],
        career: "Excel in structured roles: operations, administration, quality control, or traditional industries.",
    },
];

static AGREEABLENESS: [TraitInsight; 3] = [
    TraitInsight {
        description: "You're naturally cooperative, trusting, and concerned with others' well-being. You prioritize harmony in relationships.",
        strengths: ["Team collaboration", "Conflict resolution", "Empathy", "Supportive leadership"],
        growth: ["Assertiveness", "Boundary setting", "Self-advocacy", "Difficult conversations"],
        career: "Thrive in helping roles: healthcare, social work, education, human resources, or customer service.",
    },
    TraitInsight {
        description: "You balance cooperation with self-interest, being helpful while maintaining appropriate boundaries.",
        strengths: ["Balanced relationships", "Fair negotiation", "Selective trust", "Diplomatic communication"],
        growth: ["Deeper empathy", "Team building", "Conflict mediation", "Collaborative leadership"],
        career: "Fit well in balanced roles: management, business, law, consulting, or project coordination.",
    },
    TraitInsight {
        description: "You're direct and competitive, prioritizing efficiency and results over maintaining harmony in all situations.",
        strengths: ["Direct communication", "Competitive drive", "Objective decision-making", "Results focus"],
        growth: ["Empathy development", "Team collaboration", "Diplomatic communication", "Relationship building"],
        career: "Excel in competitive fields: sales, law, business, leadership, or entrepreneurship.",
    },
];

static CONSCIENTIOUSNESS: [TraitInsight; 3] = [
    TraitInsight {
        description: "You're highly organized, disciplined, and goal-oriented. You take responsibilities seriously and work systematically.",
        strengths: ["Excellent planning", "Reliable execution", "Goal achievement", "Quality focus"],
        growth: ["Flexibility", "Spontaneity", "Work-life balance", "Delegation skills"],
        career: "Excel in structured roles: project management, finance, operations, quality assurance, or administration.",
    },
    TraitInsight {
        description: "You balance organization with flexibility, being responsible while maintaining adaptability to changing circumstances.",
        strengths: ["Balanced approach", "Adaptive planning", "Reasonable standards", "Flexible execution"],
        growth: ["Time management", "Goal setting", "Attention to detail", "Systematic approaches"],
        career: "Suit many roles: general management, education, healthcare, consulting, or customer relations.",
    },
    TraitInsight {
        description: "You prefer flexibility and spontaneity, adapting quickly to changing situations rather than following rigid plans.",
        strengths: ["Adaptability", "Creative spontaneity", "Crisis response", "Flexible thinking"],
        growth: ["Organization skills", "Goal setting", "Time management", "Follow-through"],
        career: "Thrive in dynamic roles: creative fields, emergency services, sales, or entrepreneurship.",
    },
];

/// Insight prose for a trait at the given percentile.
pub fn trait_insight(code: TraitCode, percentile: u8) -> &'static TraitInsight {
    let table = match code {
        TraitCode::O => &OPENNESS,
        TraitCode::C => &CONSCIENTIOUSNESS,
        TraitCode::E => &EXTRAVERSION,
        TraitCode::A => &AGREEABLENESS,
        TraitCode::N => &NEUROTICISM,
    };
    match InsightBand::from_percentile(percentile) {
        InsightBand::High => &table[0],
        InsightBand::Medium => &table[1],
        InsightBand::Low => &table[2],
    }
}

/// What the questions for a trait are probing.
pub fn trait_explanation(code: TraitCode) -> &'static str {
    match code {
        TraitCode::O => "These questions assess your creativity and intellectual curiosity.",
        TraitCode::C => "These questions evaluate your organization and self-discipline.",
        TraitCode::E => "These questions examine your social energy and assertiveness.",
        TraitCode::A => "These questions measure your cooperation and empathy.",
        TraitCode::N => "These questions explore your emotional stability and stress resilience.",
    }
}

/// Encouragement for a respondent `percent` of the way through.
pub fn progress_message(percent: u8) -> &'static str {
    match percent {
        0..=24 => "Great start! You're building the foundation of your personality profile.",
        25..=49 => "Excellent progress! We're getting valuable insights into your personality.",
        50..=74 => "You're doing wonderfully! We're uncovering the deeper patterns of your behavior.",
        75..=94 => "Almost there! Your comprehensive personality profile is taking shape.",
        _ => "Outstanding! You're about to discover your complete personality insights.",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeMessage {
    pub title: &'static str,
    pub message: &'static str,
    pub subtitle: &'static str,
}

pub static WELCOME: WelcomeMessage = WelcomeMessage {
    title: "Welcome to Your Guided Personality Assessment",
    message: "This assessment is based on the Big Five model (OCEAN) and uses items from the International Personality Item Pool (IPIP), a public-domain source with established reliability and validity.",
    subtitle: "Let's discover your unique personality profile together.",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub action: &'static str,
}

/// Actionable suggestions triggered by notably high or low traits.
pub fn recommendations(scores: &TraitScores) -> Vec<Recommendation> {
    let mut result = Vec::new();

    if scores.percentile(TraitCode::N) > 70 {
        result.push(Recommendation {
            title: "Emotional Wellness",
            action: "Practice mindfulness and stress management techniques. Consider meditation or counseling for emotional regulation.",
        });
    }
    if scores.percentile(TraitCode::E) < 30 {
        result.push(Recommendation {
            title: "Social Skills Development",
            action: "Gradually expand your social comfort zone. Start with small group interactions and build confidence.",
        });
    }
    if scores.percentile(TraitCode::O) > 70 {
        result.push(Recommendation {
            title: "Creative Expression",
            action: "Channel your creativity into projects or hobbies. Explore new learning opportunities and experiences.",
        });
    }
    if scores.percentile(TraitCode::C) < 30 {
        result.push(Recommendation {
            title: "Organization & Planning",
            action: "Develop time management systems. Start with simple daily routines and gradually build structure.",
        });
    }
    if scores.percentile(TraitCode::A) > 80 {
        result.push(Recommendation {
            title: "Assertiveness Training",
            action: "Practice setting healthy boundaries. Learn to advocate for your needs while maintaining relationships.",
        });
    }

    result
}

/// Trait with the highest percentile; ties go to the earlier trait in OCEAN order.
pub fn dominant_trait(scores: &TraitScores) -> TraitCode {
    let mut best = TraitCode::O;
    for code in TraitCode::ALL {
        if scores.percentile(code) > scores.percentile(best) {
            best = code;
        }
    }
    best
}
