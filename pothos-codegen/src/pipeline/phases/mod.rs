//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] lints the schema and config
//! - [`AnalyzePhase`] builds the CRUD plan

mod analyze;
mod validate;

pub use analyze::AnalyzePhase;
pub use validate::{
    DuplicateModelLint, EmptyModelLint, Lint, LintInfo, ReservedModelNameLint,
    UnknownRelationLint, UnusedFilterLint, ValidatePhase,
};
