use std::sync::Arc;

use crate::application::dto::character_dto::ReputationDto;
use crate::application::errors::ApplicationError;
use crate::application::services::character_service::validated_key;
use crate::domain::models::reputation::ReputationEntry;
use crate::domain::repositories::character_repository::CharacterRepository;
use crate::infrastructure::logging::logger;

/// Read access to stored reputation
pub struct ReputationService {
    repository: Arc<dyn CharacterRepository>,
}

impl ReputationService {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// Stored reputation for a character, optionally limited to Legion factions.
    ///
    /// Neutral entries without progress are never returned.
    pub async fn get_reputation(
        &self,
        realm: &str,
        name: &str,
        legion_only: bool,
    ) -> Result<Vec<ReputationDto>, ApplicationError> {
        let key = validated_key(realm, name)?;
        logger::debug(&format!(
            "Getting reputation for {} (legion only: {})",
            key, legion_only
        ));

        let character = self.repository.find(&key).await?;
        Ok(character
            .reputation
            .into_iter()
            .filter(ReputationEntry::is_meaningful)
            .filter(|entry| !legion_only || entry.is_legion())
            .map(ReputationDto::from)
            .collect())
    }
}
