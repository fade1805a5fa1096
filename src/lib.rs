//! Decklist Resolver - MTG decklists resolved against Scryfall bulk data
//!
//! Parses decklists in text or MTG Arena format, resolves every card line to a
//! concrete print and recommends the best print among a card's reprints.

pub mod card;
pub mod config;
pub mod database;
pub mod decklist;
pub mod error;
pub mod recommend;

#[cfg(test)]
mod test_helpers;

pub use card::Card;
pub use config::{Config, CONFIG};
pub use database::{get_database, reload_database, reset_databases, CardDatabase, DatabaseRegistry};
pub use decklist::{
    CardEntry, Comment, DatabaseSanitizer, Decklist, DecklistFormat, DecklistParser, Entry,
    NameSanitizer, ParsedDecklist, SanitizedName,
};
pub use error::{DecklistError, Error, Result};
pub use recommend::{score, PrintQuery, PrintRecommender, ScoredPrint};
