//! Compilation context passed through pipeline phases.

use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use super::diagnostic::{Diagnostic, Severity};
use crate::plan::CrudPlan;

/// State carried through every phase of one generation run.
#[derive(Debug)]
pub struct CompilationContext {
    /// The schema being compiled.
    pub document: Document,
    /// Effective configuration, defaults already merged in.
    pub config: Config,
    /// Surviving resolvers per model (populated by AnalyzePhase).
    pub plan: Option<CrudPlan>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: Document, config: Config) -> Self {
        Self {
            document,
            config,
            plan: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The CRUD plan, or an error if AnalyzePhase has not run.
    pub fn plan(&self) -> eyre::Result<&CrudPlan> {
        self.plan
            .as_ref()
            .ok_or_else(|| eyre::eyre!("CRUD plan not set - did AnalyzePhase run?"))
    }
}
