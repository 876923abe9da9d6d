pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_percentile_bar, format_personality_type,
    format_progress, format_question_list, format_report, format_trait_table, format_welcome,
    should_use_colors,
};
