//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Name and description of a phase, for listing.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A phase in the compilation pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` lints the schema and config
/// - `AnalyzePhase` builds the CRUD plan
///
/// Phases added with [`Pipeline::phase`](super::Pipeline::phase) run after
/// the built-in ones.
pub trait Phase: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// Non-fatal issues should be recorded as diagnostics instead of
    /// returned as errors.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
