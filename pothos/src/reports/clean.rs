//! Clean command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from removing generated output.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
    pub output_dir: PathBuf,
    /// Whether the directory was (or would be) removed.
    pub removed: bool,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.removed {
            out.preformatted("No generated output found.");
            return;
        }

        if self.dry_run {
            out.section("Would delete");
        } else {
            out.section("Deleted");
        }
        out.removed_item(&self.output_dir.display().to_string());
    }
}
