// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod path;

pub use config::*;
pub use error::{Error, Result, SourceContext};
pub use path::{CONFIG_PATH_ENV, config_path};
