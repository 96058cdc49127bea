use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::character::{Character, CharacterKey, InventoryItem};
use crate::domain::models::reputation::ReputationEntry;

/// Identifies a character in responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterKeyDto {
    pub realm: String,
    pub name: String,
}

impl From<CharacterKey> for CharacterKeyDto {
    fn from(key: CharacterKey) -> Self {
        Self {
            realm: key.realm,
            name: key.name,
        }
    }
}

/// Character listing entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummaryDto {
    pub realm: String,
    pub name: String,
    pub last_modified: i64,
    /// RFC 3339 rendering of `last_modified`, absent until the first refresh
    pub last_updated: Option<String>,
    pub notes: Vec<String>,
}

impl From<Character> for CharacterSummaryDto {
    fn from(character: Character) -> Self {
        Self {
            last_updated: format_last_modified(character.last_modified),
            realm: character.realm,
            name: character.name,
            last_modified: character.last_modified,
            notes: character.notes,
        }
    }
}

/// Reputation response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationDto {
    pub id: u32,
    pub name: String,
    pub standing: u8,
    pub standing_label: String,
    pub value: i64,
    pub max: i64,
}

impl From<ReputationEntry> for ReputationDto {
    fn from(entry: ReputationEntry) -> Self {
        Self {
            id: entry.id,
            standing_label: entry.standing.label().to_string(),
            standing: entry.standing.0,
            name: entry.name,
            value: entry.value,
            max: entry.max,
        }
    }
}

/// Full stored record, as returned by `getdatastore`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub realm: String,
    pub name: String,
    pub last_modified: i64,
    pub last_updated: Option<String>,
    pub notes: Vec<String>,
    pub items: Vec<InventoryItem>,
    pub reputation: Vec<ReputationDto>,
}

impl From<Character> for CharacterDto {
    fn from(character: Character) -> Self {
        Self {
            last_updated: format_last_modified(character.last_modified),
            realm: character.realm,
            name: character.name,
            last_modified: character.last_modified,
            notes: character.notes,
            items: character.items,
            reputation: character
                .reputation
                .into_iter()
                .filter(ReputationEntry::is_meaningful)
                .map(ReputationDto::from)
                .collect(),
        }
    }
}

fn format_last_modified(last_modified: i64) -> Option<String> {
    if last_modified <= 0 {
        return None;
    }

    DateTime::<Utc>::from_timestamp_millis(last_modified).map(|moment| moment.to_rfc3339())
}
