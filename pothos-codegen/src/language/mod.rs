//! Target-language abstractions.
//!
//! - [`LanguageCodegen`] - main trait for code generators
//! - [`GenerateResult`] - what a generation run did
//! - [`CleanResult`] - what a clean run did
//! - [`PreviewFile`] - generated file preview

mod traits;

pub use traits::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile};
