use serde::{Deserialize, Serialize};

/// Faction ids introduced with the Legion expansion.
pub const LEGION_FACTION_IDS: [u32; 18] = [
    1828, // Highmountain Tribe
    1859, // The Nightfallen
    1883, // Dreamweavers
    1894, // The Wardens
    1900, // Court of Farondis
    1948, // Valarjar
    1975, // Conjurer Margoss
    2018, // Talon's Vengeance
    2045, // Armies of Legionfall
    2097, // Ilyssia of the Waters
    2098, // Keeper Raynae
    2099, // Akule Riverhorn
    2100, // Corbyn
    2101, // Sha'leth
    2102, // Impus
    2135, // Chromie
    2165, // Army of the Light
    2170, // Argussian Reach
];

/// Ordinal faction tier as encoded by the armory (0 = hated .. 7 = exalted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Standing(pub u8);

impl Standing {
    pub const NEUTRAL: Standing = Standing(3);

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Hated",
            1 => "Hostile",
            2 => "Unfriendly",
            3 => "Neutral",
            4 => "Friendly",
            5 => "Honored",
            6 => "Revered",
            7 => "Exalted",
            _ => "Unknown",
        }
    }
}

/// One faction's standing for a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationEntry {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub standing: Standing,
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub max: i64,
}

impl ReputationEntry {
    pub fn new(id: u32, standing: Standing, value: i64) -> Self {
        Self {
            id,
            name: String::new(),
            standing,
            value,
            max: 0,
        }
    }

    /// Neutral with no progress carries no information worth storing.
    pub fn is_meaningful(&self) -> bool {
        !(self.standing == Standing::NEUTRAL && self.value == 0)
    }

    pub fn is_legion(&self) -> bool {
        LEGION_FACTION_IDS.contains(&self.id)
    }
}

pub fn retain_meaningful(entries: &mut Vec<ReputationEntry>) {
    entries.retain(ReputationEntry::is_meaningful);
}
