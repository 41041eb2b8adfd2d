//! Config types and parsing for pothos.toml files.

mod crud;
mod file;
mod global;
mod inputs;
mod parse;

pub use crud::{CreateManyMode, CrudConfig, ObjectIdMapping};
pub use file::ConfigFile;
pub use global::GlobalConfig;
pub use inputs::{ALL_MODELS, ExcludeInputFields, InputCategory, InputIdMapping, InputsConfig};
use serde::Deserialize;

pub(crate) const DEFAULT_PRISMA_IMPORTER: &str = "import { Prisma } from '.prisma/client';";

/// Root config for pothos.toml
///
/// Every table is optional. Absent keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub crud: CrudConfig,
    pub inputs: InputsConfig,
}

/// Raw value accepted by the `mapIdFieldsToGraphqlId` options.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdMappingValue {
    Flag(bool),
    Mode(String),
}

impl IdMappingValue {
    fn describe(&self) -> String {
        match self {
            IdMappingValue::Flag(b) => b.to_string(),
            IdMappingValue::Mode(s) => format!("\"{s}\""),
        }
    }
}
