//! Clean operation - remove the generated output directory.

use std::path::Path;

use eyre::{Context, Result};
use pothos_crud_codegen::pipeline::{Pipeline, Severity};
use pothos_crud_config::Config;
use pothos_crud_generator::{Generator, LanguageCodegen};
use pothos_crud_schema::Document;

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Output directory containing generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
pub fn clean(document: Document, config: Config, opts: CleanOptions) -> Result<CleanReport> {
    let ctx = Pipeline::new()
        .run(document, config)
        .wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.message.clone())
        .collect();

    let removed = if opts.dry_run {
        opts.output_dir.is_dir()
    } else {
        Generator::from_context(&ctx)?
            .clean(opts.output_dir)
            .wrap_err("Failed to remove generated output")?
            .removed
    };

    Ok(CleanReport {
        dry_run: opts.dry_run,
        warnings,
        output_dir: opts.output_dir.to_path_buf(),
        removed,
    })
}
