//! Core utilities and types for the Pothos CRUD generator.
//!
//! This crate provides the file-writing primitives and string helpers
//! shared by the schema, codegen and generator crates.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult, remove_dir_if_exists, write_file};
// String utilities
pub use utils::{first_letter_lowercase, is_js_identifier};
