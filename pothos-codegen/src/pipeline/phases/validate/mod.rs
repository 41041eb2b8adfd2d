//! Validate phase - runs lints on the schema and config.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateModelLint, EmptyModelLint, ReservedModelNameLint, UnknownRelationLint,
    UnusedFilterLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the schema using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateModelLint),
                Box::new(ReservedModelNameLint),
                Box::new(UnknownRelationLint),
                Box::new(EmptyModelLint),
                Box::new(UnusedFilterLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check schema and config integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let start = ctx.diagnostics.len();
            lint.check(&ctx.document, &ctx.config, &mut ctx.diagnostics);
            for diagnostic in &mut ctx.diagnostics[start..] {
                diagnostic.lint.get_or_insert(lint.name());
            }
        }

        // Warnings are allowed through
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
