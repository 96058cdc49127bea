use std::sync::Arc;

use crate::application::dto::character_dto::{CharacterDto, CharacterKeyDto, CharacterSummaryDto};
use crate::application::errors::ApplicationError;
use crate::domain::errors::DomainError;
use crate::domain::models::character::{Character, CharacterKey};
use crate::domain::repositories::character_repository::CharacterRepository;
use crate::infrastructure::logging::logger;

/// Service for managing the tracked character list
pub struct CharacterService {
    repository: Arc<dyn CharacterRepository>,
}

impl CharacterService {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// Start tracking a character
    pub async fn add_character(
        &self,
        realm: &str,
        name: &str,
    ) -> Result<CharacterSummaryDto, ApplicationError> {
        let key = validated_key(realm, name)?;
        logger::debug(&format!("Adding character: {}", key));

        let created = self.repository.create(Character::new(key)).await?;
        tracing::info!("Now tracking {}/{}", created.realm, created.name);
        Ok(CharacterSummaryDto::from(created))
    }

    /// Stop tracking a character
    pub async fn delete_character(
        &self,
        realm: &str,
        name: &str,
    ) -> Result<CharacterKeyDto, ApplicationError> {
        let key = validated_key(realm, name)?;
        logger::debug(&format!("Deleting character: {}", key));

        self.repository.delete(&key).await?;
        tracing::info!("Stopped tracking {}", key);
        Ok(CharacterKeyDto::from(key))
    }

    pub async fn list_characters(&self) -> Result<Vec<CharacterSummaryDto>, ApplicationError> {
        logger::debug("Listing characters");
        let characters = self.repository.find_all().await?;
        Ok(characters.into_iter().map(CharacterSummaryDto::from).collect())
    }

    /// Append a free-text note to a character
    pub async fn add_note(
        &self,
        realm: &str,
        name: &str,
        note: &str,
    ) -> Result<Vec<String>, ApplicationError> {
        let key = validated_key(realm, name)?;
        let note = note.trim();
        if note.is_empty() {
            return Err(ApplicationError::ValidationError(
                "note must not be empty".to_string(),
            ));
        }

        logger::debug(&format!("Adding note to {}", key));
        Ok(self.repository.append_note(&key, note).await?)
    }

    /// Every stored record, reputation included
    pub async fn get_datastore(&self) -> Result<Vec<CharacterDto>, ApplicationError> {
        logger::debug("Reading full character store");
        let characters = self.repository.find_all().await?;
        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }
}

/// Normalize a (realm, name) pair, rejecting blanks.
pub(crate) fn validated_key(realm: &str, name: &str) -> Result<CharacterKey, DomainError> {
    if realm.trim().is_empty() {
        return Err(DomainError::InvalidData("realm is required".to_string()));
    }

    if name.trim().is_empty() {
        return Err(DomainError::InvalidData(
            "character name is required".to_string(),
        ));
    }

    Ok(CharacterKey::new(realm, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_key_rejects_blank_parts() {
        assert!(matches!(
            validated_key(" ", "Thrall"),
            Err(DomainError::InvalidData(_))
        ));
        assert!(matches!(
            validated_key("Area-52", ""),
            Err(DomainError::InvalidData(_))
        ));
        assert_eq!(
            validated_key("area-52", "thrall").expect("valid key"),
            CharacterKey::new("Area-52", "Thrall")
        );
    }
}
