use std::io::IsTerminal;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::catalog::{Question, TraitCode};
use crate::scoring::{
    progress_message, trait_explanation, trait_insight, PersonalityType, Report, ScoreResult,
    TraitLevel, TraitScores, WELCOME,
};
use crate::session::SessionSnapshot;

// Trait name column fits "Conscientiousness"
const NAME_WIDTH: usize = 17;
const DEFAULT_BAR_WIDTH: usize = 20;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Bar width that fits the terminal; fixed width when piped
fn bar_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => {
            // name + 2 spaces + bar + 2 spaces + "100" + 2 spaces + "Very High"
            let fixed = NAME_WIDTH + 2 + 2 + 3 + 2 + 9;
            (w as usize)
                .saturating_sub(fixed)
                .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
        }
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Render a percentile as a fixed-width bar, e.g. "██████░░░░"
pub fn format_percentile_bar(percentile: u8, width: usize) -> String {
    let filled = (percentile.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One line per trait: name, bar, percentile, level
pub fn format_trait_table(scores: &TraitScores, use_colors: bool) -> String {
    let width = bar_width();

    scores
        .iter()
        .map(|score| {
            let name = format!("{:<width$}", score.trait_code.name(), width = NAME_WIDTH);
            let bar = format_percentile_bar(score.percentile, width);
            let level = TraitLevel::from_percentile(score.percentile);

            if use_colors {
                let bar = match level {
                    TraitLevel::VeryHigh | TraitLevel::High => bar.green().to_string(),
                    TraitLevel::Average => bar.blue().to_string(),
                    TraitLevel::Low | TraitLevel::VeryLow => bar.yellow().to_string(),
                };
                format!(
                    "{}  {}  {:>3}  {}",
                    name.bold(),
                    bar,
                    score.percentile,
                    level.label().dimmed()
                )
            } else {
                format!("{}  {}  {:>3}  {}", name, bar, score.percentile, level.label())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Personality type heading plus description
pub fn format_personality_type(kind: PersonalityType, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n  {}", kind.label().bold().magenta(), kind.description())
    } else {
        format!("{}\n  {}", kind.label(), kind.description())
    }
}

/// Full human-readable report.
/// With `detailed`, adds per-trait insights and recommendations.
pub fn format_report(report: &Report, use_colors: bool, detailed: bool) -> String {
    let mut sections = Vec::new();

    if let Some(mode) = report.mode {
        let info = mode.info();
        let title = format!("{} ({} answers)", info.name, report.answered);
        if use_colors {
            sections.push(format!("{}\n  {}", title.bold(), info.reliability.italic()));
        } else {
            sections.push(format!("{}\n  {}", title, info.reliability));
        }
    }

    sections.push(format_trait_table(&report.traits, use_colors));
    sections.push(format_personality_type(report.personality_type.kind, use_colors));

    if detailed {
        sections.push(format_insights(&report.traits, use_colors));

        if !report.recommendations.is_empty() {
            let mut lines = vec![heading("Recommendations", use_colors)];
            for rec in &report.recommendations {
                lines.push(format!("  - {}: {}", rec.title, rec.action));
            }
            sections.push(lines.join("\n"));
        }
    }

    sections.join("\n\n")
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().underline().to_string()
    } else {
        text.to_string()
    }
}

/// Per-trait insight prose
fn format_insights(scores: &TraitScores, use_colors: bool) -> String {
    let mut lines = vec![heading("Trait Insights", use_colors)];
    for score in scores.iter() {
        let insight = trait_insight(score.trait_code, score.percentile);
        let name = score.trait_code.name();
        if use_colors {
            lines.push(format!("{} ({}%)", name.bold(), score.percentile));
        } else {
            lines.push(format!("{} ({}%)", name, score.percentile));
        }
        lines.push(format!("  {}", insight.description));
        lines.push(format!("  Strengths: {}", insight.strengths.join(", ")));
        lines.push(format!("  Growth: {}", insight.growth.join(", ")));
        lines.push(format!("  Career: {}", insight.career));
    }
    lines.join("\n")
}

/// Aggregate detail for verbose mode
pub fn format_breakdown(result: &ScoreResult) -> String {
    let mut lines: Vec<String> = result
        .breakdown
        .iter()
        .map(|b| match b.aggregate.average() {
            Some(avg) => format!(
                "  {}: sum {} over {} answers, average {:.2} -> {}",
                b.trait_code, b.aggregate.sum, b.aggregate.count, avg, b.percentile
            ),
            None => format!("  {}: no answers -> {} (neutral)", b.trait_code, b.percentile),
        })
        .collect();

    if !result.skipped.is_empty() {
        let ids: Vec<String> = result.skipped.iter().map(|id| id.to_string()).collect();
        lines.push(format!("  Skipped unknown questions: {}", ids.join(", ")));
    }

    lines.join("\n")
}

/// Question list for an assessment, marking answered questions.
/// Each run of questions on one trait is headed by what that trait explores.
pub fn format_question_list(
    questions: &[Question],
    session: Option<&SessionSnapshot>,
    use_colors: bool,
) -> String {
    if questions.is_empty() {
        return "No questions in catalog.".to_string();
    }

    let mut lines = Vec::new();
    let mut current: Option<TraitCode> = None;
    for q in questions {
        if current != Some(q.trait_code) {
            current = Some(q.trait_code);
            let header = format!(
                "{}: {}",
                q.trait_code.name(),
                trait_explanation(q.trait_code)
            );
            if use_colors {
                lines.push(header.bold().to_string());
            } else {
                lines.push(header);
            }
        }
        lines.push(format_question_line(q, session, use_colors));
    }
    lines.join("\n")
}

fn format_question_line(
    q: &Question,
    session: Option<&SessionSnapshot>,
    use_colors: bool,
) -> String {
    let tag = format!("[{}{}]", q.trait_code, q.keyed_direction.symbol());
    let answer = session
        .and_then(|s| s.answer_for(q.id))
        .map(|v| format!("  = {}", v))
        .unwrap_or_default();

    if use_colors {
        format!(
            "{:>4}. {} {}{}",
            q.id,
            tag.cyan(),
            q.text,
            answer.green()
        )
    } else {
        format!("{:>4}. {} {}{}", q.id, tag, q.text, answer)
    }
}

/// Progress summary line followed by an encouragement line
pub fn format_progress(session: &SessionSnapshot, total: usize, min_answers: usize) -> String {
    let ready = if session.is_ready(min_answers, total) {
        "ready to score".to_string()
    } else {
        let needed = min_answers.min(total).saturating_sub(session.answered());
        format!("answer {} more to score", needed)
    };
    let percent = session.progress(total);
    format!(
        "{} mode: {}/{} answered ({}%), {}\n  {}",
        session.mode,
        session.answered(),
        total,
        percent,
        ready,
        progress_message(percent)
    )
}

/// Greeting shown when an assessment starts
pub fn format_welcome(use_colors: bool) -> String {
    if use_colors {
        format!(
            "{}\n{}\n{}",
            WELCOME.title.bold(),
            WELCOME.message,
            WELCOME.subtitle.italic()
        )
    } else {
        format!("{}\n{}\n{}", WELCOME.title, WELCOME.message, WELCOME.subtitle)
    }
}

/// Pretty-printed JSON for scripting and export
pub fn format_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssessmentMode, Catalog, KeyedDirection, TraitCode};
    use crate::scoring::{score_with, Answer, ScoringConfig};

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
    fn test_bar_extremes() {
        assert_eq!(format_percentile_bar(0, 10), "░".repeat(10));
        assert_eq!(format_percentile_bar(100, 10), "█".repeat(10));
        assert_eq!(format_percentile_bar(50, 10), format!("{}{}", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn test_bar_rounds() {
        // 44% of 10 -> 4.4 -> 4; 45% -> 4.5 -> 5
        assert_eq!(format_percentile_bar(44, 10).chars().filter(|&c| c == '█').count(), 4);
        assert_eq!(format_percentile_bar(45, 10).chars().filter(|&c| c == '█').count(), 5);
    }

    #[test]
    fn test_trait_table_plain() {
        let scores = TraitScores::from_percentiles(82, 50, 10, 65, 30).unwrap();
        let table = format_trait_table(&scores, false);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Openness"));
        assert!(lines[0].contains(" 82"));
        assert!(lines[0].ends_with("Very High"));
        assert!(lines[2].ends_with("Very Low"));
        assert!(lines[4].starts_with("Neuroticism"));
    }

    #[test]
    fn test_personality_type_plain() {
        let text = format_personality_type(PersonalityType::Explorer, false);
        assert!(text.starts_with("The Explorer\n"));
    }

    #[test]
    fn test_report_detailed_includes_insights() {
        let scores = TraitScores::from_percentiles(90, 50, 50, 50, 50).unwrap();
        let report = Report::build(scores, 12, Some(AssessmentMode::Brief), None);

        let brief = format_report(&report, false, false);
        assert!(brief.contains("Brief Assessment (12 answers)"));
        assert!(brief.contains("The Explorer"));
        assert!(!brief.contains("Trait Insights"));

        let detailed = format_report(&report, false, true);
        assert!(detailed.contains("Trait Insights"));
        assert!(detailed.contains("Creative Expression"));
    }

    #[test]
    fn test_breakdown_lists_skipped() {
        let catalog = Catalog::new(None, vec![question(1, TraitCode::O, KeyedDirection::Positive)]);
        let answers = vec![Answer::new(1, 5), Answer::new(9, 3)];
        let result = score_with(&answers, &catalog, &ScoringConfig::default()).unwrap();

        let text = format_breakdown(&result);
        assert!(text.contains("O: sum 5 over 1 answers, average 5.00 -> 100"));
        assert!(text.contains("C: no answers -> 50 (neutral)"));
        assert!(text.contains("Skipped unknown questions: 9"));
    }

    #[test]
    fn test_question_list_marks_answers() {
        let questions = vec![
            question(1, TraitCode::E, KeyedDirection::Positive),
            question(2, TraitCode::E, KeyedDirection::Negative),
        ];
        let mut session = SessionSnapshot::new(AssessmentMode::Brief, None);
        session.record(2, 4).unwrap();

        let text = format_question_list(&questions, Some(&session), false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Extraversion: "));
        assert_eq!(lines[1], "   1. [E+] Question 1");
        assert_eq!(lines[2], "   2. [E-] Question 2  = 4");
    }

    #[test]
    fn test_question_list_explains_each_trait_run() {
        let questions = vec![
            question(1, TraitCode::N, KeyedDirection::Positive),
            question(2, TraitCode::N, KeyedDirection::Negative),
            question(3, TraitCode::O, KeyedDirection::Positive),
        ];

        let text = format_question_list(&questions, None, false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            format!("Neuroticism: {}", trait_explanation(TraitCode::N))
        );
        assert_eq!(
            lines[3],
            format!("Openness: {}", trait_explanation(TraitCode::O))
        );
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_empty_question_list() {
        assert_eq!(format_question_list(&[], None, false), "No questions in catalog.");
    }

    #[test]
    fn test_progress_line() {
        let mut session = SessionSnapshot::new(AssessmentMode::Brief, None);
        session.record(1, 3).unwrap();
        session.record(2, 3).unwrap();
        let partial = format_progress(&session, 20, 5);
        let lines: Vec<_> = partial.lines().collect();
        assert_eq!(lines[0], "brief mode: 2/20 answered (10%), answer 3 more to score");
        assert_eq!(lines[1], format!("  {}", progress_message(10)));

        let done = format_progress(&session, 2, 5);
        let lines: Vec<_> = done.lines().collect();
        assert_eq!(lines[0], "brief mode: 2/2 answered (100%), ready to score");
        assert!(lines[1].contains("Outstanding"));
    }

    #[test]
    fn test_progress_message_follows_percent() {
        let mut session = SessionSnapshot::new(AssessmentMode::Brief, None);
        for id in 1..=3 {
            session.record(id, 3).unwrap();
        }
        // 3 of 4 -> 75%
        assert!(format_progress(&session, 4, 1).contains("Almost there"));
        // 3 of 6 -> 50%
        assert!(format_progress(&session, 6, 1).contains("You're doing wonderfully"));
    }

    #[test]
    fn test_welcome_plain() {
        let text = format_welcome(false);
        assert!(text.starts_with(WELCOME.title));
        assert!(text.ends_with(WELCOME.subtitle));
    }

    #[test]
    fn test_json_output() {
        let report = Report::build(TraitScores::neutral(), 0, None, None);
        let json = format_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["personality_type"]["label"], "The Balanced");
    }
}
