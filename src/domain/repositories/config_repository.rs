use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::models::config::Config;

#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Load the configuration, falling back to defaults when the file is unusable
    async fn load(&self) -> Result<Config, DomainError>;

    /// Persist the configuration
    async fn save(&self, config: &Config) -> Result<(), DomainError>;

    /// Whether a configuration file exists yet
    async fn exists(&self) -> bool;
}
