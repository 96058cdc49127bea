mod repository;


use std::path::PathBuf;

use tokio::sync::RwLock;

use crate::domain::errors::DomainError;
use crate::domain::models::character::Character;
use crate::infrastructure::logging::logger;
use crate::infrastructure::persistence::file_system::{read_json_file, write_json_file};

/// Character list kept in memory and mirrored to a single JSON file.
///
/// Readers clone under the read lock. Writers hold the write lock across the
/// file write, so the file and the in-memory list change together.
pub struct FileCharacterRepository {
    characters_file: PathBuf,
    characters: RwLock<Vec<Character>>,
}

impl FileCharacterRepository {
    /// Load the store from `characters_file`.
    ///
    /// A missing or unreadable file yields an empty store.
    pub async fn open(characters_file: PathBuf) -> Self {
        let characters = match read_json_file::<Vec<Character>>(&characters_file).await {
            Ok(characters) => characters,
            Err(DomainError::NotFound(_)) => {
                tracing::info!(
                    "No character store at {:?}, starting empty",
                    characters_file
                );
                Vec::new()
            }
            Err(error) => {
                logger::warn(&format!(
                    "Ignoring unreadable character store {:?}: {}",
                    characters_file, error
                ));
                Vec::new()
            }
        };

        tracing::info!(
            "Character repository loaded {} characters from {:?}",
            characters.len(),
            characters_file
        );

        Self {
            characters_file,
            characters: RwLock::new(characters),
        }
    }

    /// Apply `change` to a copy of the list, persist the copy, then commit it.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Vec<Character>) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let mut characters = self.characters.write().await;
        let mut next = characters.clone();
        let output = change(&mut next)?;

        write_json_file(&self.characters_file, &next).await?;
        *characters = next;

        Ok(output)
    }
}
