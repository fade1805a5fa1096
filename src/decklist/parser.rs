//! Decklist parsing for text and MTG Arena (or mixed) formats.
//!
//! ```text
//! 4 Blood Crypt (RNA) 245
//! 1 Alela, Artful Provocateur
//! ```
//!
//! Every line is either resolved to a concrete print or kept as a comment.

use super::model::Decklist;
use super::sanitizer::{DatabaseSanitizer, NameSanitizer};
use crate::card::Card;
use crate::database::CardDatabase;
use crate::error::Result;
use crate::recommend::{PrintQuery, PrintRecommender};
use regex::Regex;
use std::io::BufRead;
use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;

lazy_static::lazy_static! {
    /// count, name, optional "(SET) NUMBER"
    static ref LINE_PATTERN: Regex =
        Regex::new(r"^(\d+)\s+(.+?)(?:\s+\((\S+)\)\s+(\S+))?\s*$")
            .expect("decklist line pattern is valid");
}

/// The fields of one decklist card line, before name validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecklistLine {
    pub count: NonZeroU32,
    pub name: String,
    pub set: Option<String>,
    pub collector_number: Option<String>,
}

/// Split a decklist line into count, name and optional print.
///
/// Returns `None` for lines that aren't card lines, including lines with a
/// count of zero or one too large for a `u32`.
pub fn parse_line(line: &str) -> Option<DecklistLine> {
    let captures = LINE_PATTERN.captures(line)?;

    let count = NonZeroU32::new(captures[1].parse().ok()?)?;

    Some(DecklistLine {
        count,
        name: captures[2].to_string(),
        set: captures.get(3).map(|m| m.as_str().to_string()),
        collector_number: captures.get(4).map(|m| m.as_str().to_string()),
    })
}

/// Result of parsing a whole decklist
#[derive(Debug, Clone, Default)]
pub struct ParsedDecklist {
    pub decklist: Decklist,
    /// False if any card name could not be validated
    pub ok: bool,
    pub warnings: Vec<String>,
}

impl ParsedDecklist {
    pub fn into_parts(self) -> (Decklist, bool) {
        (self.decklist, self.ok)
    }
}

pub struct DecklistParser<'a, S> {
    database: &'a CardDatabase,
    sanitizer: S,
}

impl<'a> DecklistParser<'a, DatabaseSanitizer> {
    /// Parser validating names against the names in `database`
    pub fn with_database_names(database: &'a CardDatabase) -> Self {
        Self::new(database, DatabaseSanitizer::new(database))
    }
}

impl<'a, S: NameSanitizer> DecklistParser<'a, S> {
    pub fn new(database: &'a CardDatabase, sanitizer: S) -> Self {
        Self {
            database,
            sanitizer,
        }
    }

    /// Parse a decklist file
    pub fn parse_file(&self, path: &Path) -> Result<ParsedDecklist> {
        log::info!("Parsing decklist: {}", path.display());
        let file = std::fs::File::open(path)?;
        self.parse_reader(std::io::BufReader::new(file))
    }

    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParsedDecklist> {
        let mut parsed = ParsedDecklist {
            ok: true,
            ..Default::default()
        };
        for line in reader.lines() {
            self.parse_into(&line?, &mut parsed);
        }
        Ok(parsed)
    }

    pub fn parse_str(&self, text: &str) -> ParsedDecklist {
        let mut parsed = ParsedDecklist {
            ok: true,
            ..Default::default()
        };
        for line in text.lines() {
            self.parse_into(line, &mut parsed);
        }
        parsed
    }

    fn parse_into(&self, line: &str, parsed: &mut ParsedDecklist) {
        let Some(entry) = parse_line(line) else {
            parsed.decklist.append_comment(line.trim());
            return;
        };

        let sanitized = self.sanitizer.validate_card_name(&entry.name);
        for warning in sanitized.warnings {
            warn(parsed, warning);
        }
        let Some(name) = sanitized.name else {
            parsed.decklist.append_comment(line.trim());
            parsed.ok = false;
            return;
        };

        match self.resolve_print(
            &name,
            entry.set.as_deref(),
            entry.collector_number.as_deref(),
            parsed,
        ) {
            Some(card) => parsed.decklist.append_card(entry.count, card),
            None => {
                warn(parsed, format!("No prints found for '{}'", name));
                parsed.decklist.append_comment(line.trim());
            }
        }
    }

    /// The requested print if it exists, otherwise the recommended one
    fn resolve_print(
        &self,
        name: &str,
        set: Option<&str>,
        collector_number: Option<&str>,
        parsed: &mut ParsedDecklist,
    ) -> Option<Arc<Card>> {
        if let (Some(set), Some(collector_number)) = (set, collector_number) {
            if let Some(card) = self
                .database
                .get_card(name, Some(set), Some(collector_number))
            {
                return Some(card);
            }
            warn(
                parsed,
                format!(
                    "Print {} ({}) {} not found, using recommended print",
                    name,
                    set.to_uppercase(),
                    collector_number
                ),
            );
        }

        PrintRecommender::new(self.database).recommend_best(&PrintQuery::new(name))
    }
}

fn warn(parsed: &mut ParsedDecklist, warning: String) {
    log::warn!("{}", warning);
    parsed.warnings.push(warning);
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
