use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::path::{Path, PathBuf};

use ocean_profile::catalog::{self, AssessmentMode, Catalog};
use ocean_profile::config::{self as app_config, AssessmentConfig, Config};
use ocean_profile::output;
use ocean_profile::scoring::{self, Report, ScoringConfig, TraitScores};
use ocean_profile::session::{self, SessionSnapshot};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_VALIDATION: i32 = 5;
const EXIT_STORAGE: i32 = 6;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the questions for an assessment mode
    Questions {
        /// brief, standard or complete (defaults to the session's or configured mode)
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<AssessmentMode>,
    },
    /// Start a new assessment, discarding any answers in progress
    Start {
        /// brief, standard or complete
        #[arg(short, long, value_parser = parse_mode)]
        mode: Option<AssessmentMode>,
    },
    /// Record an answer (1 = strongly disagree, 5 = strongly agree)
    Answer {
        /// Question id, as shown by `questions`
        question_id: u32,
        /// Likert value from 1 to 5
        value: u32,
    },
    /// Show assessment progress (default if no subcommand)
    Status,
    /// Score the current assessment and show the personality profile
    Score {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Include per-trait insights and recommendations
        #[arg(short, long)]
        details: bool,
        /// Also write the JSON report to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Classify explicit trait percentiles (0-100)
    Classify {
        #[arg(short = 'o', long, value_parser = clap::value_parser!(u8).range(0..=100))]
        openness: u8,
        #[arg(short = 'c', long, value_parser = clap::value_parser!(u8).range(0..=100))]
        conscientiousness: u8,
        #[arg(short = 'e', long, value_parser = clap::value_parser!(u8).range(0..=100))]
        extraversion: u8,
        #[arg(short = 'a', long, value_parser = clap::value_parser!(u8).range(0..=100))]
        agreeableness: u8,
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(0..=100))]
        neuroticism: u8,
    },
    /// Delete the assessment in progress
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "ocean-profile")]
#[command(about = "Big Five personality assessment CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/ocean-profile/config.yaml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Path to session file (defaults to ~/.config/ocean-profile/session.json)
    #[arg(long, global = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_mode(s: &str) -> Result<AssessmentMode, String> {
    AssessmentMode::parse(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ocean_profile={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_with(code: i32, message: impl Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

fn load_question_catalog(config: &Config) -> Catalog {
    let loaded = match config.catalog {
        Some(ref path) => catalog::load_catalog(path),
        None => catalog::builtin_catalog(),
    };
    let catalog = match loaded {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, format!("Catalog error: {:#}", e)),
    };

    if let Err(errors) = catalog::validate_catalog(&catalog) {
        eprintln!("Question catalog errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    catalog
}

fn load_snapshot(path: &Path, catalog: &Catalog) -> SessionSnapshot {
    let snapshot = match session::load_session(path) {
        Ok(s) => s,
        Err(e) => exit_with(EXIT_STORAGE, format!("Session error: {:#}", e)),
    };
    if snapshot.catalog_version.as_deref() != catalog.version() {
        tracing::warn!(
            session = snapshot.catalog_version.as_deref().unwrap_or("(none)"),
            catalog = catalog.version().unwrap_or("(none)"),
            "session was started with a different question catalog"
        );
    }
    snapshot
}

fn store_snapshot(path: &Path, snapshot: &SessionSnapshot) {
    if let Err(e) = session::save_session(path, snapshot) {
        exit_with(EXIT_STORAGE, format!("Session error: {:#}", e));
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Status);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match app_config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    if let Err(errors) = app_config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let assessment = config.assessment.clone().unwrap_or_default();
    let scoring_config = config.scoring.clone().unwrap_or_default();
    let session_path = match cli.session.map(PathBuf::from).or(config.session.clone()) {
        Some(p) => p,
        None => match session::get_session_path() {
            Ok(p) => p,
            Err(e) => exit_with(EXIT_CONFIG, format!("Config error: {:#}", e)),
        },
    };

    let catalog = load_question_catalog(&config);
    tracing::debug!(
        questions = catalog.len(),
        version = catalog.version().unwrap_or("(none)"),
        session = %session_path.display(),
        "ready"
    );

    let use_colors = output::should_use_colors();

    match command {
        Commands::Questions { mode } => {
            let existing = match session::find_session(&session_path) {
                Ok(s) => s,
                Err(e) => exit_with(EXIT_STORAGE, format!("Session error: {:#}", e)),
            };
            let mode = mode
                .or(existing.as_ref().map(|s| s.mode))
                .unwrap_or(assessment.mode);
            let questions = catalog::select_questions(mode, &catalog);
            let info = mode.info();
            println!("{} - {} questions, about {}", info.name, questions.len(), info.duration);
            println!(
                "{}",
                output::format_question_list(&questions, existing.as_ref(), use_colors)
            );
        }
        Commands::Start { mode } => {
            let mode = mode.unwrap_or(assessment.mode);
            let snapshot = SessionSnapshot::new(mode, catalog.version().map(str::to_string));
            store_snapshot(&session_path, &snapshot);

            let total = catalog::select_questions(mode, &catalog).len();
            let info = mode.info();
            println!("{}\n", output::format_welcome(use_colors));
            println!(
                "Started {} ({} questions, about {}).",
                info.name, total, info.duration
            );
            println!("{}", info.description);
            println!("Run `ocean-profile questions` to see them.");
        }
        Commands::Answer { question_id, value } => {
            let mut snapshot = load_snapshot(&session_path, &catalog);
            let questions = catalog::select_questions(snapshot.mode, &catalog);
            let Some(question) = questions.iter().find(|q| q.id == question_id) else {
                exit_with(
                    EXIT_VALIDATION,
                    format!(
                        "Question {} is not part of the {} assessment",
                        question_id, snapshot.mode
                    ),
                );
            };

            if let Err(e) = snapshot.record(question_id, value) {
                exit_with(EXIT_VALIDATION, e);
            }
            store_snapshot(&session_path, &snapshot);

            tracing::debug!(question_id, value, trait_code = %question.trait_code, "recorded answer");
            println!(
                "{}",
                output::format_progress(&snapshot, questions.len(), assessment.min_answers)
            );
        }
        Commands::Status => {
            let snapshot = load_snapshot(&session_path, &catalog);
            let total = catalog::select_questions(snapshot.mode, &catalog).len();
            println!(
                "{}",
                output::format_progress(&snapshot, total, assessment.min_answers)
            );
        }
        Commands::Score {
            json,
            details,
            export,
        } => {
            let snapshot = load_snapshot(&session_path, &catalog);
            let report = score_snapshot(
                &snapshot,
                &catalog,
                &assessment,
                &scoring_config,
                cli.verbose,
            );

            if json {
                match output::format_json(&report) {
                    Ok(text) => println!("{}", text),
                    Err(e) => exit_with(EXIT_STORAGE, format!("{:#}", e)),
                }
            } else {
                println!("{}", output::format_report(&report, use_colors, details));
            }

            if let Some(path) = export {
                if let Err(e) = session::save_report(&path, &report) {
                    exit_with(EXIT_STORAGE, format!("Export error: {:#}", e));
                }
                eprintln!("Report written to {}", path.display());
            }
        }
        Commands::Classify {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        } => {
            let scores = match TraitScores::from_percentiles(
                openness,
                conscientiousness,
                extraversion,
                agreeableness,
                neuroticism,
            ) {
                Ok(s) => s,
                Err(e) => exit_with(EXIT_VALIDATION, e),
            };
            let kind = scoring::classify(&scores);
            println!("{}", output::format_personality_type(kind, use_colors));
        }
        Commands::Reset => match session::clear_session(&session_path) {
            Ok(true) => println!("Assessment cleared."),
            Ok(false) => println!("No assessment in progress."),
            Err(e) => exit_with(EXIT_STORAGE, format!("Session error: {:#}", e)),
        },
    }

    std::process::exit(EXIT_SUCCESS);
}

fn score_snapshot(
    snapshot: &SessionSnapshot,
    catalog: &Catalog,
    assessment: &AssessmentConfig,
    scoring_config: &ScoringConfig,
    verbose: bool,
) -> Report {
    let total = catalog::select_questions(snapshot.mode, catalog).len();
    if !snapshot.is_ready(assessment.min_answers, total) {
        exit_with(
            EXIT_VALIDATION,
            format!(
                "Not enough answers to score: {}",
                output::format_progress(snapshot, total, assessment.min_answers)
            ),
        );
    }

    let result = match scoring::score_with(&snapshot.answers, catalog, scoring_config) {
        Ok(r) => r,
        Err(e) => exit_with(EXIT_VALIDATION, format!("Scoring error: {}", e)),
    };

    if verbose {
        eprintln!("Score breakdown:");
        eprintln!("{}", output::format_breakdown(&result));
    }

    let answered = result
        .breakdown
        .iter()
        .map(|b| b.aggregate.count as usize)
        .sum();

    Report::build(
        result.scores,
        answered,
        Some(snapshot.mode),
        snapshot.catalog_version.clone(),
    )
}
