use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{DirectoryError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const ENDPOINT_ENV: &str = "USERDIR_ENDPOINT";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub endpoint: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| DirectoryError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| DirectoryError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userdir")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(DirectoryError::NoConfigDir)
    }

    /// Resolve the catalog endpoint: explicit flag, then env var, then config file, then default.
    pub fn endpoint(&self, explicit: Option<&str>) -> Result<Url> {
        let env = std::env::var(ENDPOINT_ENV).ok();
        self.endpoint_with(explicit, env.as_deref())
    }

    fn endpoint_with(&self, explicit: Option<&str>, env: Option<&str>) -> Result<Url> {
        let raw = explicit
            .or(env)
            .or(self.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT);

        Url::parse(raw).map_err(|e| DirectoryError::InvalidUrl(format!("{raw}: {e}")))
    }
}
