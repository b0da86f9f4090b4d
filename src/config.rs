use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{rlog_debug, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Executor capacity to use when the CLI flag is absent.
    ///
    /// When set, this takes precedence over the input header's M value;
    /// the `--executors` flag still overrides both.
    pub default_executors: Option<usize>,
}

impl Config {
    pub fn rondo_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".rondo"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::rondo_dir()?.join("rondo.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        rlog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            rlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        rlog_debug!("Config loaded: default_executors={:?}", config.default_executors);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let rondo_dir = Self::rondo_dir()?;
        if !rondo_dir.exists() {
            fs::create_dir_all(&rondo_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        rlog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}
