use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid number, got '{0}'")]
    InvalidPort(String),
    #[error("ID_STRATEGY must be 'uuid' or 'sequential', got '{0}'")]
    UnknownIdStrategy(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub id_strategy: IdStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed_file: None,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `SEED_FILE` and `ID_STRATEGY` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let seed_file = lookup("SEED_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let id_strategy = match lookup("ID_STRATEGY").as_deref().map(str::trim) {
            None | Some("") | Some("uuid") => IdStrategy::Uuid,
            Some("sequential") => IdStrategy::Sequential,
            Some(other) => return Err(ConfigError::UnknownIdStrategy(other.to_string())),
        };

        Ok(Self {
            host,
            port,
            seed_file,
            id_strategy,
        })
    }
}
