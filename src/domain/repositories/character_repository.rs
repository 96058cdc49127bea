use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::models::character::{Character, CharacterKey};
use crate::domain::models::reputation::ReputationEntry;

/// Repository interface for the tracked character list.
///
/// Every mutation is persisted before it returns. A mutation that fails leaves
/// the stored list unchanged.
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Snapshot of every tracked character, in insertion order
    async fn find_all(&self) -> Result<Vec<Character>, DomainError>;

    /// Find a single character by key
    async fn find(&self, key: &CharacterKey) -> Result<Character, DomainError>;

    /// Start tracking a character; fails with `AlreadyExists` on a duplicate key
    async fn create(&self, character: Character) -> Result<Character, DomainError>;

    /// Stop tracking a character; fails with `NotFound` if it is not tracked
    async fn delete(&self, key: &CharacterKey) -> Result<(), DomainError>;

    /// Append a note and return the character's notes afterwards
    async fn append_note(&self, key: &CharacterKey, note: &str)
    -> Result<Vec<String>, DomainError>;

    /// Replace the reputation set and armory timestamp
    async fn apply_reputation(
        &self,
        key: &CharacterKey,
        last_modified: i64,
        reputation: Vec<ReputationEntry>,
    ) -> Result<(), DomainError>;
}
