pub mod storage;
pub mod subset;
pub mod types;
pub mod validation;

pub use storage::{builtin_catalog, load_catalog, parse_catalog};
pub use subset::{select_questions, AssessmentMode, ModeInfo};
pub use types::{Catalog, KeyedDirection, Question, TraitCode};
pub use validation::validate_catalog;
