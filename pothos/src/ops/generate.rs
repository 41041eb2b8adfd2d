//! Generate operation - TypeScript output from a schema document.

use std::{path::Path, sync::Arc};

use eyre::{Context, Result};
use pothos_crud_codegen::pipeline::{Pipeline, Severity, SnapshotPlugin};
use pothos_crud_config::Config;
use pothos_crud_generator::{Generator, LanguageCodegen};
use pothos_crud_schema::Document;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
pub fn generate(
    document: Document,
    config: Config,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(".pothos/debug");

    // Snapshots stay in memory until generation is done, since generation may
    // delete the output directory they live in.
    let snapshots = opts.visualize.then(|| Arc::new(SnapshotPlugin::new()));
    let mut pipeline = Pipeline::new();
    if let Some(plugin) = &snapshots {
        pipeline = pipeline.plugin(Arc::clone(plugin));
    }
    let ctx = pipeline.run(document, config).wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.message.clone())
        .collect();

    let generator = Generator::from_context(&ctx)?;
    let plan = ctx.plan()?;

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            deleted_output_dir: gen_result.deleted_output_dir,
            written: gen_result.stats.written,
            unchanged: gen_result.stats.unchanged,
            failed: gen_result
                .stats
                .failed
                .into_iter()
                .map(|f| (f.path, f.error))
                .collect(),
            debug_dir: opts.visualize.then(|| debug_dir.clone()),
        })
    };

    if let Some(plugin) = &snapshots {
        plugin
            .write_to_dir(&debug_dir)
            .wrap_err("Failed to write pipeline snapshots")?;
    }

    Ok(GenerateReport {
        warnings,
        model_count: plan.models.len(),
        resolver_count: plan.resolver_count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pothos_crud_schema::testing::user_document;

    use super::*;

    fn options(output_dir: &Path, visualize: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            output_dir,
            dry_run: false,
            visualize,
        }
    }

    #[test]
    fn test_snapshots_survive_output_dir_deletion() {
        let temp = tempfile::tempdir().unwrap();
        let output_dir = temp.path().join("generated");
        let mut config = Config::default();
        config.global.delete_output_dir_before_generate = true;
        fs::create_dir_all(output_dir.join(".pothos/debug")).unwrap();
        fs::write(output_dir.join(".pothos/debug/stale.json"), "{}").unwrap();

        let report = generate(user_document(), config, options(&output_dir, true)).unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert!(written.deleted_output_dir);
        let debug_dir = written.debug_dir.unwrap();
        assert_eq!(debug_dir, output_dir.join(".pothos/debug"));
        assert!(debug_dir.join("validate.json").exists());
        assert!(!debug_dir.join("stale.json").exists());
        let analyze = fs::read_to_string(debug_dir.join("analyze.json")).unwrap();
        assert!(analyze.contains("findFirstUser"));
        assert!(output_dir.join("objects.ts").exists());
    }

    #[test]
    fn test_no_snapshots_without_visualize() {
        let temp = tempfile::tempdir().unwrap();
        let output_dir = temp.path().join("generated");

        let report =
            generate(user_document(), Config::default(), options(&output_dir, false)).unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert!(written.debug_dir.is_none());
        assert!(!output_dir.join(".pothos").exists());
    }
}
