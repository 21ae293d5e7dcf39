mod models;

pub use models::Config;

use anyhow::{Context, Result};
use std::{env, fs, path::Path, path::PathBuf};
use thiserror::Error;
use validator::Validate;

pub const TOKEN_VAR: &str = "PDD_TOKEN";
pub const CONFIG_PATH_VAR: &str = "PDD_CONFIG";
pub const API_URL_VAR: &str = "PDD_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Require {0} env variable for api auth")]
    MissingCredential(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config_file = env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
        let mut config = Self::load(env::var(TOKEN_VAR).ok(), config_file.as_deref())?;

        if let Ok(api_url) = env::var(API_URL_VAR) {
            config.api_url = api_url;
            config.validate().context("Invalid configuration")?;
        }

        Ok(config)
    }

    /// Builds the configuration from an explicit token and optional YAML settings file.
    /// The token check runs first so a missing credential is reported before anything else.
    pub fn load(api_token: Option<String>, config_file: Option<&Path>) -> Result<Self> {
        let api_token = api_token
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingCredential(TOKEN_VAR))?;

        let mut config = match config_file {
            Some(path) => Self::read_file(path)?,
            None => Self::default(),
        };
        config.api_token = api_token;

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
