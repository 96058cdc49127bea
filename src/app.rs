use std::path::Path;
use std::sync::Arc;

use crate::application::services::character_service::CharacterService;
use crate::application::services::refresh_service::{RefreshHandle, RefreshService};
use crate::application::services::reputation_service::ReputationService;
use crate::domain::errors::DomainError;
use crate::domain::models::config::Config;
use crate::domain::repositories::armory_repository::ArmoryRepository;
use crate::infrastructure::apis::http_armory_repository::HttpArmoryRepository;
use crate::infrastructure::persistence::file_system::DataDirectory;
use crate::presentation::commands::registry;

mod bootstrap;

pub struct AppState {
    pub data_directory: DataDirectory,
    pub config: Config,
    pub character_service: Arc<CharacterService>,
    pub reputation_service: Arc<ReputationService>,
    pub refresh_service: Arc<RefreshService>,
}

impl AppState {
    /// Build the application against the Blizzard armory configured in `config.json`
    pub async fn new(data_root: &Path) -> Result<Self, DomainError> {
        let data_directory = bootstrap::initialize_data_directory(data_root).await?;
        let config = bootstrap::load_config(&data_directory).await?;
        let armory_repository = Arc::new(HttpArmoryRepository::new(&config)?);

        Ok(Self::assemble(data_directory, config, armory_repository).await)
    }

    /// Build the application against a caller-supplied armory
    pub async fn with_armory_repository(
        data_root: &Path,
        armory_repository: Arc<dyn ArmoryRepository>,
    ) -> Result<Self, DomainError> {
        let data_directory = bootstrap::initialize_data_directory(data_root).await?;
        let config = bootstrap::load_config(&data_directory).await?;

        Ok(Self::assemble(data_directory, config, armory_repository).await)
    }

    async fn assemble(
        data_directory: DataDirectory,
        config: Config,
        armory_repository: Arc<dyn ArmoryRepository>,
    ) -> Self {
        tracing::info!(
            "Initializing application with data root: {:?}",
            data_directory.root()
        );

        let services = bootstrap::build_services(&data_directory, armory_repository).await;

        tracing::info!("Application initialized successfully");

        Self {
            data_directory,
            config,
            character_service: services.character_service,
            reputation_service: services.reputation_service,
            refresh_service: services.refresh_service,
        }
    }

    /// Run one command; see `presentation::commands::registry::dispatch`
    pub async fn dispatch(&self, args: &[String]) -> Vec<u8> {
        registry::dispatch(self, args).await
    }

    /// Check every character for staleness and refetch in the background
    pub fn start_refresh(&self) -> RefreshHandle {
        self.refresh_service.start()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use async_trait::async_trait;
    use rand::random;
    use serde_json::{Value, json};
    use tokio::fs;

    use super::*;
    use crate::domain::models::character::CharacterKey;
    use crate::domain::models::reputation::{ReputationEntry, Standing};
    use crate::domain::repositories::armory_repository::{ArmoryReputation, ArmorySummary};

    struct FixedArmory {
        profiles: HashMap<CharacterKey, ArmoryReputation>,
    }

    #[async_trait]
    impl ArmoryRepository for FixedArmory {
        async fn fetch_summary(&self, key: &CharacterKey) -> Result<ArmorySummary, DomainError> {
            self.profiles
                .get(key)
                .map(|profile| ArmorySummary {
                    last_modified: profile.last_modified,
                })
                .ok_or_else(|| DomainError::NotFound(key.to_string()))
        }

        async fn fetch_reputation(
            &self,
            key: &CharacterKey,
        ) -> Result<ArmoryReputation, DomainError> {
            self.profiles
                .get(key)
                .cloned()
                .ok_or_else(|| DomainError::NotFound(key.to_string()))
        }
    }

    fn unique_temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("wowtracker-app-{}", random::<u64>()))
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[tokio::test]
    async fn first_start_writes_default_config() {
        let root = unique_temp_root();
        let app_state = AppState::with_armory_repository(
            &root,
            Arc::new(FixedArmory {
                profiles: HashMap::new(),
            }),
        )
        .await
        .expect("build app state");

        assert!(root.join("config").join("config.json").is_file());
        assert_eq!(app_state.config.update_timeout, Config::default().update_timeout);

        let _ = fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn refresh_on_startup_feeds_getrep() {
        let root = unique_temp_root();
        let mut profiles = HashMap::new();
        profiles.insert(
            CharacterKey::new("Area-52", "Thrall"),
            ArmoryReputation {
                last_modified: 1_500_000_000_000,
                reputation: vec![
                    ReputationEntry::new(1948, Standing(6), 5000),
                    ReputationEntry::new(1900, Standing::NEUTRAL, 0),
                ],
            },
        );
        let armory = Arc::new(FixedArmory { profiles });

        let app_state = AppState::with_armory_repository(&root, armory.clone())
            .await
            .expect("build app state");
        app_state
            .dispatch(&strings(&["addchar", "Area-52", "Thrall"]))
            .await;
        drop(app_state);

        let restarted = AppState::with_armory_repository(&root, armory)
            .await
            .expect("rebuild app state");
        let report = restarted
            .start_refresh()
            .wait()
            .await
            .expect("refresh completes");
        assert_eq!(report.refreshed, 1);

        let bytes = restarted
            .dispatch(&strings(&["getrep", "Area-52", "Thrall"]))
            .await;
        let response: Value = serde_json::from_slice(&bytes).expect("envelope");
        assert_eq!(response["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(response["data"][0]["id"], json!(1948));

        let _ = fs::remove_dir_all(&root).await;
    }
}
