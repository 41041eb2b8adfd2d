//! Code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

use crate::generation::WriteStats;

/// Trait for code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory.
    ///
    /// Only fatal problems are errors; failed individual writes are
    /// reported in [`GenerateResult::stats`].
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Remove previously generated output.
    ///
    /// Default implementation removes nothing.
    fn clean(&self, output_dir: &Path) -> Result<CleanResult> {
        Ok(CleanResult {
            path: output_dir.to_path_buf(),
            removed: false,
        })
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Whether the output directory was wiped first
    pub deleted_output_dir: bool,
    pub stats: WriteStats,
}

/// Result of cleaning generated output
#[derive(Debug)]
pub struct CleanResult {
    pub path: PathBuf,
    /// False when there was nothing to remove
    pub removed: bool,
}

/// A generated file for preview
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    pub content: String,
}
