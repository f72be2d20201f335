use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::api_config::ApiConfig;
use crate::domain::csv::IngestConfig;
use crate::domain::error::{AppError, Result};

pub const CONFIG_FILE: &str = "contact-upload.toml";
pub const ENV_PREFIX: &str = "CONTACT_UPLOAD_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ingest: IngestConfig,
    /// `tracing_subscriber` env-filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ingest: IngestConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

/// Layers defaults, an optional TOML file and `CONTACT_UPLOAD_*` env vars.
/// Nested keys use `__`, e.g. `CONTACT_UPLOAD_API__BASE_URL`.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::with_file(CONFIG_FILE)
    }

    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&self.path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment()
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config
            .api
            .validate()
            .map_err(|e| AppError::ConfigError(format!("api: {}", e)))?;
        config
            .ingest
            .validate()
            .map_err(|e| AppError::ConfigError(format!("ingest: {}", e)))?;

        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
