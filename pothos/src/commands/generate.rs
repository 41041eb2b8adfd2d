use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{SourceArgs, output_dir};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output directory (overrides global.outputDir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to <output>/.pothos/debug after generation
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let sources = self.sources.load();
        let output_dir = output_dir(self.output.as_deref(), &sources.config);

        let report = ops::generate(
            sources.document,
            sources.config,
            ops::generate::GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
