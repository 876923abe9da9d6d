use super::types::{Catalog, TraitCode};
use std::collections::HashSet;

/// Check a catalog before an assessment uses it.
/// Returns all problems at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, question) in catalog.questions().iter().enumerate() {
        if question.id == 0 {
            errors.push(format!("questions[{}].id: must be a positive integer", i));
        }
        if !seen.insert(question.id) {
            errors.push(format!(
                "questions[{}].id: duplicate id {}",
                i, question.id
            ));
        }
        if question.text.trim().is_empty() {
            errors.push(format!("questions[{}].text: must not be empty", i));
        }
    }

    for code in TraitCode::ALL {
        if catalog.count_for(code) == 0 {
            errors.push(format!("trait {} ({}): no questions", code, code.name()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
