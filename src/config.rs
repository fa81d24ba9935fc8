use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{elog_debug, Error, Result};

/// Backend base URL used when the config file and CLI provide none.
/// Matches the task service's development default.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the task service, e.g. `http://localhost:5000`.
    pub backend_url: Option<String>,
}

impl Config {
    pub fn eisen_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".eisen"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::eisen_dir()?.join("eisen.toml"))
    }

    pub fn effective_backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        elog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            elog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        elog_debug!("Config loaded: backend_url={:?}", config.backend_url);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let eisen_dir = Self::eisen_dir()?;
        if !eisen_dir.exists() {
            fs::create_dir_all(&eisen_dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        elog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}
