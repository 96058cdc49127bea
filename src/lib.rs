use std::path::PathBuf;

mod app;
mod application;
mod domain;
mod infrastructure;
mod presentation;

pub use app::AppState;
pub use application::services::refresh_service::{RefreshHandle, RefreshReport};
pub use domain::errors::DomainError;
pub use domain::models::character::{Character, CharacterKey, title_case};
pub use domain::models::config::Config;
pub use domain::models::reputation::{LEGION_FACTION_IDS, ReputationEntry, Standing};
pub use domain::repositories::armory_repository::{
    ArmoryRepository, ArmoryReputation, ArmorySummary,
};

use infrastructure::logging::logger;
use infrastructure::persistence::file_system::DataDirectory;

/// Bring the tracker up under `data_root` and kick off the startup refresh.
///
/// The refresh runs in the background; commands may be dispatched on the
/// returned state right away.
pub async fn run(data_root: PathBuf) -> Result<(AppState, RefreshHandle), DomainError> {
    let data_directory = DataDirectory::new(data_root.clone());
    if let Err(error) = logger::init_logger(data_directory.logs()) {
        eprintln!("Failed to initialize logger: {}", error);
    }

    tracing::info!("Starting WowTracker");

    let app_state = AppState::new(&data_root).await?;
    let refresh = app_state.start_refresh();

    Ok((app_state, refresh))
}
