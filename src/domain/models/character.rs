use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::models::reputation::{ReputationEntry, retain_meaningful};

/// Remote data must be at least this much newer than the cached copy before it is refetched.
pub const STALENESS_THRESHOLD_SECS: i64 = 300;

/// Normalized (realm, name) pair identifying a tracked character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterKey {
    pub realm: String,
    pub name: String,
}

impl CharacterKey {
    pub fn new(realm: &str, name: &str) -> Self {
        Self {
            realm: title_case(realm),
            name: title_case(name),
        }
    }
}

impl fmt::Display for CharacterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.realm, self.name)
    }
}

/// An item stack carried by a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

/// A tracked character as stored in `characters.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub realm: String,
    pub name: String,
    /// Milliseconds since the epoch, as reported by the armory.
    #[serde(default)]
    pub last_modified: i64,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub reputation: Vec<ReputationEntry>,
}

impl Character {
    /// A freshly tracked character that has never been fetched.
    pub fn new(key: CharacterKey) -> Self {
        Self {
            realm: key.realm,
            name: key.name,
            last_modified: 0,
            notes: Vec::new(),
            items: Vec::new(),
            reputation: Vec::new(),
        }
    }

    pub fn key(&self) -> CharacterKey {
        CharacterKey::new(&self.realm, &self.name)
    }

    /// Whether the armory copy stamped `remote_last_modified` is newer than ours
    /// by more than the threshold.
    pub fn is_stale(&self, remote_last_modified: i64) -> bool {
        remote_last_modified / 1000 - self.last_modified / 1000 > STALENESS_THRESHOLD_SECS
    }

    pub fn replace_reputation(&mut self, last_modified: i64, mut reputation: Vec<ReputationEntry>) {
        retain_meaningful(&mut reputation);
        self.last_modified = last_modified;
        self.reputation = reputation;
    }
}

/// Lowercase the input, then uppercase each letter that opens a word.
///
/// A word starts at the beginning of the string or after any character that is
/// neither alphanumeric nor `_`, so `kel'thuzad` becomes `Kel'Thuzad` and
/// `area-52` becomes `Area-52`.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.trim().chars().flat_map(char::to_lowercase) {
        if at_word_start {
            output.extend(ch.to_uppercase());
        } else {
            output.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }

    output
}
