//! Read-only creature catalog.
//!
//! The battle core only needs `CreatureCatalog::lookup`. `InMemoryCatalog`
//! is the provided implementation; it is filled from a directory of creature
//! records (PokeAPI `*.json` documents or `*.ron` stats) or from a compact
//! postcard bundle.

pub mod pokedex;

use crate::errors::{CatalogError, CatalogResult};
use schema::{CreatureStats, RawCreatureRecord};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// A read-only lookup from creature identifier to base stats.
///
/// Identifiers are either a national number (`"25"`) or a name, compared
/// case-insensitively with punctuation ignored.
pub trait CreatureCatalog: Send + Sync {
    fn lookup(&self, identifier: &str) -> CatalogResult<CreatureStats>;
}

/// Lowercases and strips everything but ASCII letters and digits, so
/// `"Mr. Mime"`, `"mr-mime"` and `"MRMIME"` compare equal.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    by_number: BTreeMap<u16, CreatureStats>,
    by_name: HashMap<String, u16>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stats(stats: impl IntoIterator<Item = CreatureStats>) -> Self {
        let mut catalog = Self::new();
        for entry in stats {
            catalog.insert(entry);
        }
        catalog
    }

    /// Adds a creature, replacing any previous entry with the same number.
    pub fn insert(&mut self, stats: CreatureStats) -> Option<CreatureStats> {
        let key = normalize_identifier(&stats.name);
        let number = stats.number;
        let previous = self.by_number.insert(number, stats);
        if let Some(old) = &previous {
            let old_key = normalize_identifier(&old.name);
            if old_key != key && self.by_name.get(&old_key) == Some(&number) {
                self.by_name.remove(&old_key);
            }
        }
        self.by_name.insert(key, number);
        previous
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }

    /// All creatures in national-number order.
    pub fn iter(&self) -> impl Iterator<Item = &CreatureStats> {
        self.by_number.values()
    }

    /// Loads from a directory of records, or from a bundle file otherwise.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        if path.is_dir() {
            Self::load_dir(path)
        } else {
            let bytes = fs::read(path)?;
            Self::from_bundle(&bytes)
        }
    }

    /// Loads every `*.json` (PokeAPI document) and `*.ron` (`CreatureStats`)
    /// file in `dir`. Any malformed record fails the whole load.
    pub fn load_dir(dir: &Path) -> CatalogResult<Self> {
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut catalog = Self::new();
        for path in paths {
            let extension = path.extension().and_then(|ext| ext.to_str());
            let stats = match extension {
                Some("json") => decode_json_record(&path)?,
                Some("ron") => decode_ron_record(&path)?,
                _ => continue,
            };
            tracing::debug!(file = %path.display(), number = stats.number, name = %stats.name, "loaded creature");
            if let Some(previous) = catalog.insert(stats) {
                tracing::warn!(
                    number = previous.number,
                    name = %previous.name,
                    "duplicate creature number, later record wins"
                );
            }
        }

        tracing::info!(dir = %dir.display(), creatures = catalog.len(), "creature catalog loaded");
        Ok(catalog)
    }

    /// Decodes a postcard bundle produced by `to_bundle`.
    pub fn from_bundle(bytes: &[u8]) -> CatalogResult<Self> {
        let stats: Vec<CreatureStats> =
            postcard::from_bytes(bytes).map_err(|e| CatalogError::Bundle(e.to_string()))?;
        Ok(Self::from_stats(stats))
    }

    /// Encodes the whole catalog as a compact postcard bundle.
    pub fn to_bundle(&self) -> CatalogResult<Vec<u8>> {
        let stats: Vec<&CreatureStats> = self.by_number.values().collect();
        postcard::to_allocvec(&stats).map_err(|e| CatalogError::Bundle(e.to_string()))
    }

    fn resolve_number(&self, normalized: &str) -> Option<u16> {
        if normalized.chars().all(|c| c.is_ascii_digit()) {
            return normalized.parse().ok();
        }
        self.by_name
            .get(normalized)
            .copied()
            .or_else(|| pokedex::number_for(normalized))
    }
}

impl CreatureCatalog for InMemoryCatalog {
    fn lookup(&self, identifier: &str) -> CatalogResult<CreatureStats> {
        let normalized = normalize_identifier(identifier);
        if normalized.is_empty() {
            return Err(CatalogError::NotFound(identifier.to_string()));
        }

        self.resolve_number(&normalized)
            .and_then(|number| self.by_number.get(&number))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(identifier.trim().to_string()))
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn decode_json_record(path: &Path) -> CatalogResult<CreatureStats> {
    let text = fs::read_to_string(path)?;
    let raw: RawCreatureRecord = serde_json::from_str(&text).map_err(|e| CatalogError::Json {
        source_name: source_name(path),
        message: e.to_string(),
    })?;

    let stem_number = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.parse::<u16>().ok());

    raw.into_stats(stem_number)
        .map_err(|reason| CatalogError::MalformedRecord {
            source_name: source_name(path),
            reason,
        })
}

fn decode_ron_record(path: &Path) -> CatalogResult<CreatureStats> {
    let text = fs::read_to_string(path)?;
    ron::from_str(&text).map_err(|e| CatalogError::Ron {
        source_name: source_name(path),
        message: e.to_string(),
    })
}
