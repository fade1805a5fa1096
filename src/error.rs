//! Error types for decklist_resolver

use std::path::PathBuf;

/// Unified error type for decklist_resolver operations
#[derive(Debug, thiserror::Error)]
pub enum DecklistError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse bulk data JSON
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Bulk data snapshot is not on disk
    #[error("Bulk data file not found: {}", .0.display())]
    BulkDataMissing(PathBuf),
    /// Bulk data parsed, but is not a list of card objects
    #[error("Invalid bulk data: {0}")]
    InvalidBulkData(String),
    /// Requested decklist output format does not exist
    #[error("Unknown decklist format: {0}")]
    UnknownFormat(String),
    /// Card record has no image URIs in any layout we know about
    #[error("Unknown layout {layout} for card {name}")]
    UnknownLayout { name: String, layout: String },
}

pub type Error = DecklistError;

/// Result alias for decklist_resolver operations
pub type Result<T> = std::result::Result<T, DecklistError>;
