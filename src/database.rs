//! In-memory card database loaded from a Scryfall bulk data snapshot
//!
//! Queries are case-insensitive exact matches on arbitrary fields. Loaded
//! databases are memoized per database name in a process-wide registry.

use crate::card::Card;
use crate::config::Config;
use crate::error::{DecklistError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// A field filter; `None` values are ignored
pub type Filter<'a> = (&'a str, Option<&'a str>);

/// All prints from one bulk data snapshot, in snapshot order
#[derive(Debug, Default)]
pub struct CardDatabase {
    cards: Vec<Arc<Card>>,
}

impl CardDatabase {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().map(Arc::new).collect(),
        }
    }

    /// Parse a bulk data document: a JSON array of card objects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(items) = value else {
            return Err(DecklistError::InvalidBulkData(
                "expected a JSON array of cards".to_string(),
            ));
        };

        let mut cards = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match Card::from_value(item) {
                Some(card) => cards.push(card),
                None => {
                    return Err(DecklistError::InvalidBulkData(format!(
                        "element {} is not a card object",
                        index
                    )))
                }
            }
        }

        Ok(Self::from_cards(cards))
    }

    /// Load a bulk data file from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DecklistError::BulkDataMissing(path.to_path_buf()));
        }

        log::info!("Loading card database from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let database = Self::from_json_str(&content)?;
        log::info!("Loaded {} cards", database.len());

        Ok(database)
    }

    /// Get all cards matching every non-`None` filter.
    ///
    /// Matching is case insensitive. A filter on a field the card lacks
    /// excludes the card. Results keep snapshot order.
    pub fn get_cards(&self, filters: &[Filter<'_>]) -> Vec<Arc<Card>> {
        let active = active_filters(filters);
        self.cards
            .iter()
            .filter(|card| matches_all(card, &active))
            .cloned()
            .collect()
    }

    /// Find a card by name and possibly set and collector number.
    ///
    /// If several prints match, the first one is returned.
    pub fn get_card(
        &self,
        name: &str,
        set: Option<&str>,
        collector_number: Option<&str>,
    ) -> Option<Arc<Card>> {
        let active = active_filters(&[
            ("name", Some(name)),
            ("set", set),
            ("collector_number", collector_number),
        ]);
        self.cards
            .iter()
            .find(|card| matches_all(card, &active))
            .cloned()
    }

    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Drop `None` filters and lowercase the rest
fn active_filters<'a>(filters: &[Filter<'a>]) -> Vec<(&'a str, String)> {
    filters
        .iter()
        .filter_map(|(field, value)| value.map(|v| (*field, v.to_lowercase())))
        .collect()
}

fn matches_all(card: &Card, active: &[(&str, String)]) -> bool {
    active
        .iter()
        .all(|(field, expected)| card.field_matches(field, expected))
}

/// Loaded databases keyed by database name.
///
/// The lock is held while loading, so concurrent first access to the same
/// database parses the bulk file exactly once.
#[derive(Debug, Default)]
pub struct DatabaseRegistry {
    databases: Mutex<HashMap<String, Arc<CardDatabase>>>,
}

impl DatabaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<CardDatabase>>> {
        // A panicking loader never inserts, so the map is still consistent
        self.databases
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the database for `name`, running `load` if it isn't cached yet
    pub fn get_or_load<F>(&self, name: &str, load: F) -> Result<Arc<CardDatabase>>
    where
        F: FnOnce() -> Result<CardDatabase>,
    {
        let mut databases = self.lock();
        if let Some(database) = databases.get(name) {
            log::debug!("Database cache hit for {}", name);
            return Ok(Arc::clone(database));
        }

        let database = Arc::new(load()?);
        databases.insert(name.to_string(), Arc::clone(&database));
        Ok(database)
    }

    /// Drop any cached copy of `name` and load it again
    pub fn reload<F>(&self, name: &str, load: F) -> Result<Arc<CardDatabase>>
    where
        F: FnOnce() -> Result<CardDatabase>,
    {
        let mut databases = self.lock();
        databases.remove(name);

        let database = Arc::new(load()?);
        databases.insert(name.to_string(), Arc::clone(&database));
        Ok(database)
    }

    /// Forget every loaded database
    pub fn reset(&self) {
        self.lock().clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

lazy_static::lazy_static! {
    static ref DATABASES: DatabaseRegistry = DatabaseRegistry::new();
}

/// Get a database by name, loading its bulk file from the configured data directory
pub fn get_database(config: &Config, name: &str) -> Result<Arc<CardDatabase>> {
    DATABASES.get_or_load(name, || CardDatabase::load(&config.bulk_file(name)))
}

/// Force a fresh load of a database from disk
pub fn reload_database(config: &Config, name: &str) -> Result<Arc<CardDatabase>> {
    DATABASES.reload(name, || CardDatabase::load(&config.bulk_file(name)))
}

/// Forget all databases loaded by [`get_database`]
pub fn reset_databases() {
    DATABASES.reset();
}

#[cfg(test)]
#[path = "database_tests.rs"]
mod tests;
