//! Configuration loading from environment.

use std::env;

use users_notion::{DEFAULT_BASE_URL, DEFAULT_VERSION, NotionConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub notion: NotionConfig,
    /// Bearer token required from API callers, if set
    pub api_token: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port: u16 = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let notion = NotionConfig::new(require("NOTION_TOKEN")?, require("NOTION_DATABASE_ID")?)
            .with_base_url(get("NOTION_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .with_version(get("NOTION_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string()));

        Ok(Self {
            port,
            notion,
            api_token: get("API_TOKEN"),
        })
    }
}
