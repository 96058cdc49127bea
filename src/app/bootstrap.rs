use std::path::Path;
use std::sync::Arc;

use crate::application::services::character_service::CharacterService;
use crate::application::services::refresh_service::RefreshService;
use crate::application::services::reputation_service::ReputationService;
use crate::domain::errors::DomainError;
use crate::domain::models::config::Config;
use crate::domain::repositories::armory_repository::ArmoryRepository;
use crate::domain::repositories::character_repository::CharacterRepository;
use crate::domain::repositories::config_repository::ConfigRepository;
use crate::infrastructure::logging::logger;
use crate::infrastructure::persistence::file_system::DataDirectory;
use crate::infrastructure::repositories::file_character_repository::FileCharacterRepository;
use crate::infrastructure::repositories::file_config_repository::FileConfigRepository;

pub(super) struct AppServices {
    pub character_service: Arc<CharacterService>,
    pub reputation_service: Arc<ReputationService>,
    pub refresh_service: Arc<RefreshService>,
}

pub(super) async fn initialize_data_directory(
    data_root: &Path,
) -> Result<DataDirectory, DomainError> {
    let data_directory = DataDirectory::new(data_root.to_path_buf());
    data_directory.initialize().await?;
    Ok(data_directory)
}

/// Load `config.json`, writing a default one first if none exists yet.
pub(super) async fn load_config(data_directory: &DataDirectory) -> Result<Config, DomainError> {
    let config_repository = FileConfigRepository::new(data_directory.config_file());

    if !config_repository.exists().await {
        logger::info(&format!(
            "Writing default config to {:?}",
            data_directory.config_file()
        ));
        config_repository.save(&Config::default()).await?;
    }

    config_repository.load().await
}

pub(super) async fn build_services(
    data_directory: &DataDirectory,
    armory_repository: Arc<dyn ArmoryRepository>,
) -> AppServices {
    let character_repository: Arc<dyn CharacterRepository> =
        Arc::new(FileCharacterRepository::open(data_directory.characters_file()).await);

    let character_service = Arc::new(CharacterService::new(character_repository.clone()));
    let reputation_service = Arc::new(ReputationService::new(character_repository.clone()));
    let refresh_service = Arc::new(RefreshService::new(
        character_repository,
        armory_repository,
    ));

    AppServices {
        character_service,
        reputation_service,
        refresh_service,
    }
}
