//! Lint trait for schema and config validation.

use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use crate::pipeline::Diagnostic;

/// Name and description of a lint, for listing.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks the schema (and the config that applies to it).
pub trait Lint: Send + Sync {
    /// Kebab-case name, attached to every diagnostic the lint raises.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, document: &Document, config: &Config, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
