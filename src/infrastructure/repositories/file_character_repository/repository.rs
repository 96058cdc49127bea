use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::models::character::{Character, CharacterKey};
use crate::domain::models::reputation::ReputationEntry;
use crate::domain::repositories::character_repository::CharacterRepository;

use super::FileCharacterRepository;

pub(super) const ALREADY_EXISTS: &str = "character already exists";
pub(super) const NOT_FOUND: &str = "character not found";

fn position(characters: &[Character], key: &CharacterKey) -> Option<usize> {
    characters
        .iter()
        .position(|character| character.key() == *key)
}

fn find_mut<'a>(
    characters: &'a mut [Character],
    key: &CharacterKey,
) -> Result<&'a mut Character, DomainError> {
    let index = position(characters, key)
        .ok_or_else(|| DomainError::NotFound(NOT_FOUND.to_string()))?;
    Ok(&mut characters[index])
}

#[async_trait]
impl CharacterRepository for FileCharacterRepository {
    async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
        Ok(self.characters.read().await.clone())
    }

    async fn find(&self, key: &CharacterKey) -> Result<Character, DomainError> {
        let characters = self.characters.read().await;
        position(&characters, key)
            .map(|index| characters[index].clone())
            .ok_or_else(|| DomainError::NotFound(NOT_FOUND.to_string()))
    }

    async fn create(&self, character: Character) -> Result<Character, DomainError> {
        let key = character.key();

        self.mutate(|characters| {
            if position(characters, &key).is_some() {
                return Err(DomainError::AlreadyExists(ALREADY_EXISTS.to_string()));
            }

            characters.push(character.clone());
            Ok(character)
        })
        .await
    }

    async fn delete(&self, key: &CharacterKey) -> Result<(), DomainError> {
        self.mutate(|characters| {
            let index = position(characters, key)
                .ok_or_else(|| DomainError::NotFound(NOT_FOUND.to_string()))?;
            characters.remove(index);
            Ok(())
        })
        .await
    }

    async fn append_note(
        &self,
        key: &CharacterKey,
        note: &str,
    ) -> Result<Vec<String>, DomainError> {
        self.mutate(|characters| {
            let character = find_mut(characters, key)?;
            character.notes.push(note.to_string());
            Ok(character.notes.clone())
        })
        .await
    }

    async fn apply_reputation(
        &self,
        key: &CharacterKey,
        last_modified: i64,
        reputation: Vec<ReputationEntry>,
    ) -> Result<(), DomainError> {
        self.mutate(|characters| {
            find_mut(characters, key)?.replace_reputation(last_modified, reputation);
            Ok(())
        })
        .await
    }
}
