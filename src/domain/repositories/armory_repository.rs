use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::DomainError;
use crate::domain::models::character::CharacterKey;
use crate::domain::models::reputation::ReputationEntry;

/// Lightweight character profile used for staleness checks
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorySummary {
    pub last_modified: i64,
}

/// Character profile including the reputation field set
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmoryReputation {
    pub last_modified: i64,
    #[serde(default)]
    pub reputation: Vec<ReputationEntry>,
}

/// Remote source of character data.
#[async_trait]
pub trait ArmoryRepository: Send + Sync {
    async fn fetch_summary(&self, key: &CharacterKey) -> Result<ArmorySummary, DomainError>;

    async fn fetch_reputation(&self, key: &CharacterKey) -> Result<ArmoryReputation, DomainError>;
}
