use clap::Args;
use eyre::Result;

use super::SourceArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub sources: SourceArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let sources = self.sources.load();
        let label = sources
            .config_path
            .clone()
            .unwrap_or_else(|| self.sources.schema.clone());

        let report = ops::check(sources.document, sources.config, &label)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
