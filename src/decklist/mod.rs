//! Decklists: the entry model, name validation and the line parser

mod model;
mod parser;
mod sanitizer;

pub use model::{CardEntry, Comment, Decklist, DecklistFormat, Entry};
pub use parser::{parse_line, DecklistLine, DecklistParser, ParsedDecklist};
pub use sanitizer::{DatabaseSanitizer, NameSanitizer, SanitizedName};
