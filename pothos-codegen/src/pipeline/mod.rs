//! Compilation pipeline for code generation.
//!
//! A [`Pipeline`] takes a parsed schema document and the effective config
//! through a fixed set of phases:
//!
//! - `validate` runs lints and stops on errors
//! - `analyze` builds the [`CrudPlan`](crate::plan::CrudPlan)
//!
//! Plugins get hooks before and after each phase, and all diagnostics are
//! collected in the [`CompilationContext`].

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
