use super::types::{Catalog, Question};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/questions.json");

/// On-disk catalog shapes: a bare question array or a versioned object.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Question>),
    Versioned {
        #[serde(default)]
        version: Option<String>,
        questions: Vec<Question>,
    },
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Versioned { version, questions } => Catalog::new(version, questions),
            CatalogFile::Bare(questions) => Catalog::new(None, questions),
        }
    }
}

/// Parse a catalog from JSON text.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let file: CatalogFile =
        serde_json::from_str(content).context("Failed to parse question catalog")?;
    Ok(file.into())
}

/// Load a question catalog from a JSON file.
///
/// Accepts either `[{...}, ...]` or `{"version": "...", "questions": [...]}`.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read question catalog at {}", path.display()))?;
    let catalog = parse_catalog(&content)
        .with_context(|| format!("Invalid question catalog in {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        questions = catalog.len(),
        "loaded question catalog"
    );
    Ok(catalog)
}

/// The embedded IPIP 50-item Big Five marker set.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog(BUILTIN_CATALOG).context("Built-in question catalog is malformed")
}
