use std::path::{Path, PathBuf};

use super::Config;
use crate::Result;

/// A pothos.toml file with both raw content and parsed config.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a pothos.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
