//! Card name validation
//!
//! Maps the name typed in a decklist to the canonical name used by the card
//! database.

use crate::database::CardDatabase;
use std::collections::HashMap;

/// Outcome of validating a card name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedName {
    /// Canonical card name, or `None` if the input isn't a known card
    pub name: Option<String>,
    pub warnings: Vec<String>,
}

impl SanitizedName {
    pub fn found(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            warnings: Vec::new(),
        }
    }

    pub fn unknown(warning: impl Into<String>) -> Self {
        Self {
            name: None,
            warnings: vec![warning.into()],
        }
    }
}

pub trait NameSanitizer {
    fn validate_card_name(&self, name: &str) -> SanitizedName;
}

impl<F> NameSanitizer for F
where
    F: Fn(&str) -> SanitizedName,
{
    fn validate_card_name(&self, name: &str) -> SanitizedName {
        self(name)
    }
}

/// Validates names against the names present in a card database
#[derive(Debug, Default)]
pub struct DatabaseSanitizer {
    /// Lowercase name -> canonical name
    names: HashMap<String, String>,
    /// Lowercase face name -> canonical name of the whole card
    faces: HashMap<String, String>,
}

impl DatabaseSanitizer {
    pub fn new(database: &CardDatabase) -> Self {
        let mut names = HashMap::new();
        let mut faces = HashMap::new();

        for card in database.cards() {
            let name = card.name();
            if name.is_empty() {
                continue;
            }
            names
                .entry(name.to_lowercase())
                .or_insert_with(|| name.to_string());

            let split_parts = name.split(" // ").filter(|part| *part != name);
            for face in card.face_names().into_iter().chain(split_parts) {
                faces
                    .entry(face.to_lowercase())
                    .or_insert_with(|| name.to_string());
            }
        }

        log::debug!(
            "Indexed {} card names and {} face names",
            names.len(),
            faces.len()
        );
        Self { names, faces }
    }
}

impl NameSanitizer for DatabaseSanitizer {
    fn validate_card_name(&self, name: &str) -> SanitizedName {
        let normalized = normalize_whitespace(name);
        let key = normalized.to_lowercase();

        if let Some(canonical) = self.names.get(&key) {
            let mut result = SanitizedName::found(canonical.clone());
            if canonical != name {
                result.warnings.push(format!(
                    "Corrected card name '{}' to '{}'",
                    name, canonical
                ));
            }
            return result;
        }

        // "Fire" for "Fire // Ice", front or back face of a DFC
        if let Some(canonical) = self.faces.get(&key) {
            let mut result = SanitizedName::found(canonical.clone());
            result.warnings.push(format!(
                "Resolved card face '{}' to '{}'",
                name, canonical
            ));
            return result;
        }

        SanitizedName::unknown(format!("Unknown card name '{}'", name))
    }
}

/// Trim and collapse runs of whitespace into single spaces
fn normalize_whitespace(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::test_helpers::{make_test_card, make_test_database};
    use serde_json::json;

    fn sanitizer() -> DatabaseSanitizer {
        let delver = Card::from_value(json!({
            "name": "Delver of Secrets // Insectile Aberration",
            "set": "isd",
            "collector_number": "51",
            "card_faces": [
                { "name": "Delver of Secrets" },
                { "name": "Insectile Aberration" }
            ]
        }))
        .unwrap();
        let fire_ice = Card::from_value(json!({
            "name": "Fire // Ice",
            "set": "mh2",
            "collector_number": "290"
        }))
        .unwrap();

        DatabaseSanitizer::new(&make_test_database(vec![
            make_test_card("Blood Crypt", "rna", "245"),
            make_test_card("Blood Crypt", "dis", "171"),
            delver,
            fire_ice,
        ]))
    }

    #[test]
    fn exact_name_has_no_warnings() {
        let result = sanitizer().validate_card_name("Blood Crypt");
        assert_eq!(result, SanitizedName::found("Blood Crypt"));
    }

    #[test]
    fn casing_and_whitespace_are_corrected() {
        let result = sanitizer().validate_card_name("  blood   CRYPT ");
        assert_eq!(result.name.as_deref(), Some("Blood Crypt"));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Corrected"));
    }

    #[test]
    fn face_names_resolve_to_full_name() {
        let s = sanitizer();

        let result = s.validate_card_name("Insectile Aberration");
        assert_eq!(
            result.name.as_deref(),
            Some("Delver of Secrets // Insectile Aberration")
        );
        assert!(result.warnings[0].contains("card face"));

        let result = s.validate_card_name("fire");
        assert_eq!(result.name.as_deref(), Some("Fire // Ice"));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let result = sanitizer().validate_card_name("Blood Cryptt");
        assert!(result.name.is_none());
        assert_eq!(result.warnings, vec!["Unknown card name 'Blood Cryptt'"]);
    }

    #[test]
    fn closures_are_sanitizers() {
        let upper = |name: &str| SanitizedName::found(name.to_uppercase());
        assert_eq!(
            upper.validate_card_name("bolt").name.as_deref(),
            Some("BOLT")
        );
    }
}
