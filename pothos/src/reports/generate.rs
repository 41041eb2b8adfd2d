//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
    /// Models in the plan.
    pub model_count: usize,
    /// Resolvers that survived filtering.
    pub resolver_count: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Whether the output directory was wiped first.
    pub deleted_output_dir: bool,
    pub written: usize,
    pub unchanged: usize,
    /// Destination path and error of every failed write.
    pub failed: Vec<(String, String)>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if written.deleted_output_dir {
            out.key_value("Deleted", &written.output_dir.display().to_string());
        }
        out.key_value("Generated", &written.output_dir.display().to_string());
        out.key_value_indented("models", &self.model_count.to_string());
        out.key_value_indented("resolvers", &self.resolver_count.to_string());
        out.key_value_indented("written", &written.written.to_string());
        out.key_value_indented("unchanged", &written.unchanged.to_string());

        if !written.failed.is_empty() {
            out.newline();
            out.section(&format!("Failed writes ({})", written.failed.len()));
            for (path, error) in &written.failed {
                out.list_item(&format!("{}: {}", path, error));
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            warnings: vec![],
            model_count: 1,
            resolver_count: 11,
            result,
        }
    }

    #[test]
    fn test_preview_lists_every_file() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "utils.ts".into(),
                content: "export {};".into(),
            }],
        }))
        .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── utils.ts ──",
                "export {};",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }

    #[test]
    fn test_written_reports_failures() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("generated"),
            deleted_output_dir: false,
            written: 18,
            unchanged: 0,
            failed: vec![("inputs.ts".into(), "permission denied".into())],
            debug_dir: None,
        }))
        .render(&mut out);

        assert_eq!(out.lines[0], "Generated: generated");
        assert!(out.lines.contains(&"Failed writes (1):".to_string()));
        assert!(out.lines.contains(&"  - inputs.ts: permission denied".to_string()));
    }
}
