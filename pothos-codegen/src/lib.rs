//! Shared code generation building blocks for the Pothos CRUD generator.
//!
//! # Module Organization
//!
//! - [`builder`] - code building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - output management (FileRegistry, WriteStats)
//! - [`language`] - generator traits (LanguageCodegen, PreviewFile)
//! - [`pipeline`] - compilation phases, lints and diagnostics
//! - [`plan`] - CRUD operations, resolver filtering and the per-model plan
//! - [`testing`] - test utilities (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod plan;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
