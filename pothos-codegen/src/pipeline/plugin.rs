//! Pipeline plugin trait for extensibility.

use std::sync::Arc;

use eyre::Result;

use super::CompilationContext;

/// A plugin that can hook into the compilation pipeline.
///
/// Plugins receive callbacks before and after each phase runs. Returning an
/// error from either hook aborts the run.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}

/// Lets a caller keep a handle on a plugin after handing it to the pipeline.
impl<P: Plugin + ?Sized> Plugin for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        (**self).on_before_phase(phase, ctx)
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        (**self).on_after_phase(phase, ctx)
    }
}
