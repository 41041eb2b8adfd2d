//! Pipeline orchestrator.

use eyre::Result;
use pothos_crud_config::Config;
use pothos_crud_schema::Document;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, analyze) followed by any user phases,
/// calling plugin hooks before and after each one.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::new());
/// let ctx = pipeline.run(document, config)?;
/// let plan = ctx.plan()?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the default lint set.
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase over `document` with `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if validation reports errors or a phase or plugin
    /// fails fatally.
    pub fn run(&self, document: Document, config: Config) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document, config);

        self.run_phase(&self.validate, &mut ctx)?;
        self.run_phase(&AnalyzePhase, &mut ctx)?;

        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
