mod check;
mod clean;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use pothos_crud_config::{CONFIG_PATH_ENV, Config, config_path};
use pothos_crud_schema::Document;

/// Extension trait for exiting on config and schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pothos_crud_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for pothos_crud_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pothos-crud")]
#[command(version)]
#[command(about = "Generate Pothos objects, CRUD resolvers and inputs from a Prisma schema")]
pub(crate) struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript files from a Prisma schema document
    Generate(GenerateCommand),

    /// Validate the schema and config without generating code
    Check(CheckCommand),

    /// Remove the generated output directory
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where the schema document and config come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the Prisma DMMF JSON document
    #[arg(short, long, default_value = "prisma/dmmf.json")]
    pub schema: PathBuf,

    /// Path to pothos.toml, relative to the schema directory
    /// (overridden by POTHOS_CRUD_CONFIG_PATH)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// A loaded schema document and its effective config.
pub struct Sources {
    pub document: Document,
    pub config: Config,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
}

impl SourceArgs {
    /// Load both inputs, exiting with a report if either cannot be read.
    pub fn load(&self) -> Sources {
        let document = Document::from_file(&self.schema).unwrap_or_exit();

        let config_path = config_path(
            std::env::var(CONFIG_PATH_ENV).ok(),
            self.config.as_deref(),
            self.schema.parent(),
        );
        let config = Config::load(config_path.as_deref()).unwrap_or_exit();
        tracing::debug!(
            schema = %self.schema.display(),
            config = ?config_path,
            models = document.models().len(),
            "loaded sources"
        );

        Sources {
            document,
            config,
            config_path,
        }
    }
}

/// The output directory: `--output` wins over `global.outputDir`.
pub fn output_dir(flag: Option<&Path>, config: &Config) -> PathBuf {
    flag.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.global.output_dir))
}
