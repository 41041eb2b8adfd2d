use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{SourceArgs, output_dir};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output directory (overrides global.outputDir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let sources = self.sources.load();
        let output_dir = output_dir(self.output.as_deref(), &sources.config);

        let report = ops::clean(
            sources.document,
            sources.config,
            ops::clean::CleanOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
