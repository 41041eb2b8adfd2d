//! Locating the config file.

use std::path::{Path, PathBuf};

use crate::{Config, Result};

/// Environment variable that overrides any configured path.
pub const CONFIG_PATH_ENV: &str = "POTHOS_CRUD_CONFIG_PATH";

/// Resolve which config file to load.
///
/// `env` is the value of [`CONFIG_PATH_ENV`] and wins over `configured`.
/// Relative paths are joined to `schema_dir`, the directory holding the
/// schema document.
pub fn config_path(
    env: Option<String>,
    configured: Option<&Path>,
    schema_dir: Option<&Path>,
) -> Option<PathBuf> {
    let chosen = env
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))?;

    if chosen.is_absolute() {
        return Some(chosen);
    }
    match schema_dir {
        Some(dir) => Some(dir.join(chosen)),
        None => Some(chosen),
    }
}

impl Config {
    /// Load the config at `path`, or the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Config::from_file(path),
            None => Ok(Config::default()),
        }
    }
}
