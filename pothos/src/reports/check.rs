//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema and config validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file, or the schema when defaults apply.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Planned resolvers per model; empty when validation failed.
    pub models: Vec<ModelSummary>,
}

/// Resolver counts for one model.
#[derive(Debug)]
pub struct ModelSummary {
    pub name: String,
    pub queries: usize,
    pub mutations: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.section(&format!(
            "{} model{}",
            self.models.len(),
            if self.models.len() == 1 { "" } else { "s" }
        ));
        for model in &self.models {
            out.key_value_indented(
                &model.name,
                &format!("{} queries, {} mutations", model.queries, model.mutations),
            );
        }
    }
}
