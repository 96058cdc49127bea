use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::errors::DomainError;
use crate::domain::models::config::Config;
use crate::domain::repositories::config_repository::ConfigRepository;
use crate::infrastructure::logging::logger;
use crate::infrastructure::persistence::file_system::{read_json_file, write_json_file};

/// Environment variable that takes precedence over `apiKey` in the config file.
pub const API_KEY_ENV: &str = "WOW_API_KEY";

pub struct FileConfigRepository {
    config_file: PathBuf,
    api_key_override: Option<String>,
}

impl FileConfigRepository {
    /// Config repository honouring `WOW_API_KEY` from the process environment
    pub fn new(config_file: PathBuf) -> Self {
        let api_key_override = std::env::var(API_KEY_ENV).ok();
        Self::with_api_key_override(config_file, api_key_override)
    }

    pub fn with_api_key_override(config_file: PathBuf, api_key_override: Option<String>) -> Self {
        let api_key_override = api_key_override
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        tracing::info!(
            "Config repository initialized with config file: {:?}",
            config_file
        );

        Self {
            config_file,
            api_key_override,
        }
    }
}

#[async_trait]
impl ConfigRepository for FileConfigRepository {
    async fn load(&self) -> Result<Config, DomainError> {
        let mut config = match read_json_file::<Config>(&self.config_file).await {
            Ok(config) => config,
            Err(DomainError::NotFound(_)) => {
                tracing::info!("No config at {:?}, using defaults", self.config_file);
                Config::default()
            }
            Err(error) => {
                logger::warn(&format!(
                    "Ignoring unreadable config {:?}: {}",
                    self.config_file, error
                ));
                Config::default()
            }
        };

        if let Some(api_key) = &self.api_key_override {
            tracing::debug!("Using API key from {}", API_KEY_ENV);
            config.api_key = api_key.clone();
        }

        Ok(config)
    }

    async fn save(&self, config: &Config) -> Result<(), DomainError> {
        write_json_file(&self.config_file, config).await
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.config_file)
            .await
            .unwrap_or(false)
    }
}
