mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, falling back to
/// `config.yaml` and then to built-in defaults when neither exists.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from(DEFAULT_CONFIG_PATH).await,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", config_path, e)))?;

    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not a map.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

impl ModelConfig {
    /// Resolves the API key from the process environment.
    pub fn api_key(&self) -> Result<String> {
        self.api_key_from(|name| env::var(name).ok())
    }

    pub fn api_key_from(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            Some(_) => Err(Error::config(format!(
                "Environment variable {} is empty",
                self.api_key_env
            ))),
            None => Err(Error::config(format!(
                "Environment variable {} is not set; it must hold the {} API key",
                self.api_key_env, self.provider
            ))),
        }
    }
}
