//! Decklist container: resolved card entries and verbatim comment lines

use crate::card::{Card, ImageUris};
use crate::error::{DecklistError, Result};
use std::fmt;
use std::io::Write;
use std::num::NonZeroU32;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Output format of a decklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecklistFormat {
    /// `4 Blood Crypt (RNA) 245`
    #[default]
    Arena,
    /// `4 Blood Crypt`
    Text,
}

impl DecklistFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecklistFormat::Arena => "arena",
            DecklistFormat::Text => "text",
        }
    }
}

impl FromStr for DecklistFormat {
    type Err = DecklistError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "arena" => Ok(DecklistFormat::Arena),
            "text" => Ok(DecklistFormat::Text),
            _ => Err(DecklistError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DecklistFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decklist line resolved to a concrete print
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    pub count: NonZeroU32,
    pub card: Arc<Card>,
}

impl CardEntry {
    pub fn name(&self) -> &str {
        self.card.name()
    }

    pub fn set(&self) -> &str {
        self.card.set()
    }

    pub fn collector_number(&self) -> &str {
        self.card.collector_number()
    }

    /// Image URIs of all faces of the print
    pub fn image_uris(&self) -> Result<Vec<&ImageUris>> {
        self.card.image_uris()
    }

    pub fn format(&self, format: DecklistFormat) -> String {
        match format {
            DecklistFormat::Text => format!("{} {}", self.count, self.name()),
            DecklistFormat::Arena => format!(
                "{} {} ({}) {}",
                self.count,
                self.name(),
                self.set().to_uppercase(),
                self.collector_number()
            ),
        }
    }
}

/// A line that isn't a card, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Card(CardEntry),
    Comment(Comment),
}

impl Entry {
    pub fn format(&self, format: DecklistFormat) -> String {
        match self {
            Entry::Card(card) => card.format(format),
            Entry::Comment(comment) => comment.text.clone(),
        }
    }

    pub fn as_card(&self) -> Option<&CardEntry> {
        match self {
            Entry::Card(card) => Some(card),
            Entry::Comment(_) => None,
        }
    }
}

/// Cards and comment lines of a decklist, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decklist {
    entries: Vec<Entry>,
}

impl Decklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_card(&mut self, count: NonZeroU32, card: Arc<Card>) {
        self.entries.push(Entry::Card(CardEntry { count, card }));
    }

    pub fn append_comment(&mut self, text: impl Into<String>) {
        self.entries
            .push(Entry::Comment(Comment { text: text.into() }));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// All card entries in this decklist
    pub fn cards(&self) -> impl Iterator<Item = &CardEntry> {
        self.entries.iter().filter_map(Entry::as_card)
    }

    /// Total count of cards in this decklist.
    ///
    /// Summed as `u64` since every entry may hold up to `u32::MAX` copies.
    pub fn total_count(&self) -> u64 {
        self.cards().map(|c| u64::from(c.count.get())).sum()
    }

    /// Count of unique prints in this decklist
    pub fn total_count_unique(&self) -> usize {
        self.cards().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format every entry, one per line
    pub fn format(&self, format: DecklistFormat) -> String {
        self.entries
            .iter()
            .map(|entry| entry.format(format))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format by format name ("arena" or "text")
    pub fn format_as(&self, format: &str) -> Result<String> {
        Ok(self.format(format.parse()?))
    }

    /// Write the decklist to a file, replacing its contents
    pub fn save(&self, path: &Path, format: DecklistFormat) -> Result<()> {
        std::fs::write(path, self.format(format) + "\n")?;
        log::debug!("Saved {} entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Append the decklist to a file, creating it if needed
    pub fn append(&self, path: &Path, format: DecklistFormat) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}", self.format(format))?;
        log::debug!("Appended {} entries to {}", self.len(), path.display());
        Ok(())
    }
}
