//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - fluent API for building indented code
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for nodes that lower to fragments
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
