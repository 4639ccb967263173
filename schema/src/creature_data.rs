use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Immutable base data for one creature, as served by the catalog.
///
/// `height` and `mass` keep the source units (decimetres and hectograms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    pub number: u16,
    pub name: String,
    pub height: u16,
    pub mass: u16,
    pub hp: u16,
    pub attack: u16,
    pub special: u16,
    pub speed: u16,
    pub types: Vec<PokemonType>,
    pub abilities: Vec<String>,
}

impl CreatureStats {
    /// Human-readable name: each hyphen-separated word capitalized
    /// (`"mr-mime"` becomes `"Mr-Mime"`).
    pub fn display_name(&self) -> String {
        self.name
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for CreatureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (#{:03})", self.display_name(), self.number)?;
        writeln!(f, "--------------------")?;

        let type_names: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
        writeln!(f, "Type(s): {}", type_names.join(" / "))?;
        writeln!(f, "Abilities: {}", self.abilities.join(", "))?;
        writeln!(f, "Height: {}  Mass: {}", self.height, self.mass)?;
        writeln!(f, "--------------------")?;

        const LABEL_WIDTH: usize = 12;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "HP", self.hp)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Attack", self.attack)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Special", self.special)?;
        write!(f, "{:<LABEL_WIDTH$} : {}", "Speed", self.speed)
    }
}

// --- Raw PokeAPI record shape ---
// Only the fields the catalog needs are declared; everything else in the
// source document is ignored during decoding.

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStatEntry {
    pub base_stat: u16,
    pub stat: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: NamedRef,
}

/// A creature document as published by PokeAPI (`/api/v2/pokemon/{name}`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawCreatureRecord {
    #[serde(default)]
    pub id: Option<u16>,
    pub name: String,
    pub height: u16,
    pub weight: u16,
    #[serde(default)]
    pub stats: Vec<RawStatEntry>,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
}

/// Reasons a raw record cannot become a `CreatureStats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Neither the record nor its source carried a national number
    MissingNumber,
    /// One of the four battle stats is absent
    MissingStat(&'static str),
    /// A type tag that no `PokemonType` matches
    UnknownType(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MissingNumber => write!(f, "record has no national number"),
            RecordError::MissingStat(stat) => write!(f, "record is missing the '{}' stat", stat),
            RecordError::UnknownType(tag) => write!(f, "unknown type tag '{}'", tag),
        }
    }
}

impl std::error::Error for RecordError {}

impl RawCreatureRecord {
    /// Decodes the loosely shaped record into typed stats.
    ///
    /// `fallback_number` is used when the document has no `id` field (for
    /// example a file named `25.json`).
    pub fn into_stats(self, fallback_number: Option<u16>) -> Result<CreatureStats, RecordError> {
        let number = self
            .id
            .or(fallback_number)
            .ok_or(RecordError::MissingNumber)?;

        let stat = |key: &'static str| -> Result<u16, RecordError> {
            self.stats
                .iter()
                .find(|entry| entry.stat.name == key)
                .map(|entry| entry.base_stat)
                .ok_or(RecordError::MissingStat(key))
        };
        let hp = stat("hp")?;
        let attack = stat("attack")?;
        let special = stat("special-attack")?;
        let speed = stat("speed")?;

        let types = self
            .types
            .iter()
            .map(|slot| {
                PokemonType::from_str(&slot.type_ref.name)
                    .map_err(|_| RecordError::UnknownType(slot.type_ref.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let abilities = self
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect();

        Ok(CreatureStats {
            number,
            name: self.name,
            height: self.height,
            mass: self.weight,
            hp,
            attack,
            special,
            speed,
            types,
            abilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU_JSON: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 40, "effort": 0, "stat": {"name": "defense", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-attack", "url": ""}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-defense", "url": ""}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": ""}}
        ],
        "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
        "abilities": [
            {"ability": {"name": "static", "url": ""}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true, "slot": 3}
        ]
    }"#;

    #[test]
    fn test_decodes_pokeapi_record() {
        let raw: RawCreatureRecord = serde_json::from_str(PIKACHU_JSON).unwrap();
        let stats = raw.into_stats(None).unwrap();

        assert_eq!(stats.number, 25);
        assert_eq!(stats.name, "pikachu");
        assert_eq!(stats.mass, 60);
        assert_eq!((stats.hp, stats.attack, stats.special, stats.speed), (35, 55, 50, 90));
        assert_eq!(stats.types, vec![PokemonType::Electric]);
        assert_eq!(stats.abilities, vec!["static", "lightning-rod"]);
    }

    #[test]
    fn test_missing_stat_is_rejected() {
        let json = r#"{"name": "ditto", "height": 3, "weight": 40,
            "stats": [{"base_stat": 48, "stat": {"name": "hp"}}]}"#;
        let raw: RawCreatureRecord = serde_json::from_str(json).unwrap();

        assert_eq!(raw.into_stats(Some(132)), Err(RecordError::MissingStat("attack")));
    }

    #[test]
    fn test_number_falls_back_to_source() {
        let mut raw: RawCreatureRecord = serde_json::from_str(PIKACHU_JSON).unwrap();
        raw.id = None;
        assert_eq!(raw.clone().into_stats(Some(25)).unwrap().number, 25);
        assert_eq!(raw.into_stats(None), Err(RecordError::MissingNumber));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = PIKACHU_JSON.replace("\"electric\"", "\"shadow\"");
        let raw: RawCreatureRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(
            raw.into_stats(None),
            Err(RecordError::UnknownType("shadow".to_string()))
        );
    }

    #[test]
    fn test_ron_form_matches_struct() {
        let ron_text = r#"(
            number: 4, name: "charmander", height: 6, mass: 85,
            hp: 39, attack: 52, special: 60, speed: 65,
            types: [Fire], abilities: ["blaze", "solar-power"],
        )"#;
        let stats: CreatureStats = ron::from_str(ron_text).unwrap();

        assert_eq!(stats.display_name(), "Charmander");
        assert_eq!(stats.types, vec![PokemonType::Fire]);
    }

    #[test]
    fn test_display_name_capitalizes_each_word() {
        let raw: RawCreatureRecord = serde_json::from_str(PIKACHU_JSON).unwrap();
        let mut stats = raw.into_stats(None).unwrap();
        stats.name = "mr-mime".to_string();
        assert_eq!(stats.display_name(), "Mr-Mime");
    }
}
