//! Runtime configuration, read from the environment with sensible defaults.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "scryfall-default-cards";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the bulk data snapshots
    pub data_dir: PathBuf,
    /// Bulk data snapshot to resolve against, e.g. "scryfall-default-cards"
    pub database_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database_name: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        if let Ok(data_dir) = env::var("DECKLIST_DATA_DIR") {
            if !data_dir.trim().is_empty() {
                self.data_dir = PathBuf::from(data_dir);
            }
        }
        if let Ok(database) = env::var("DECKLIST_DATABASE") {
            if !database.trim().is_empty() {
                self.database_name = database.trim().to_string();
            }
        }
    }

    /// Path of the bulk data file for a database name
    pub fn bulk_file(&self, database_name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", database_name))
    }
}

/// Returns the default data directory: ~/.cache/decklist_resolver
fn default_data_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("decklist_resolver")
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
