//! Scryfall card record
//!
//! Bulk data objects are kept verbatim: the schema differs between layouts
//! (single faced, split, transform, ...) so the record is a read-only JSON
//! object with typed accessors for the fields this crate reads.

use crate::error::{DecklistError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object holding one set of image URIs (small, normal, large, png, ...)
pub type ImageUris = Map<String, Value>;

/// One print of a card, as found in the bulk data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    fields: Map<String, Value>,
}

impl Card {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a card from a JSON value, returning `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Raw access to any field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    fn bool_field(&self, field: &str) -> Option<bool> {
        self.fields.get(field).and_then(Value::as_bool)
    }

    pub fn name(&self) -> &str {
        self.str_field("name").unwrap_or_default()
    }

    pub fn oracle_id(&self) -> Option<&str> {
        self.str_field("oracle_id")
    }

    /// Set code, lowercase in Scryfall data (e.g. "rna")
    pub fn set(&self) -> &str {
        self.str_field("set").unwrap_or_default()
    }

    /// Collector number; a string since promos carry suffixes like "245p"
    pub fn collector_number(&self) -> &str {
        self.str_field("collector_number").unwrap_or_default()
    }

    pub fn lang(&self) -> Option<&str> {
        self.str_field("lang")
    }

    pub fn frame(&self) -> Option<&str> {
        self.str_field("frame")
    }

    pub fn border_color(&self) -> Option<&str> {
        self.str_field("border_color")
    }

    pub fn layout(&self) -> &str {
        self.str_field("layout").unwrap_or("unknown")
    }

    /// Digital-only print (MTGO/Arena)
    pub fn digital(&self) -> bool {
        self.bool_field("digital").unwrap_or(false)
    }

    pub fn nonfoil(&self) -> bool {
        self.bool_field("nonfoil").unwrap_or(false)
    }

    pub fn highres_image(&self) -> bool {
        self.bool_field("highres_image").unwrap_or(false)
    }

    pub fn frame_effects(&self) -> Vec<&str> {
        self.fields
            .get("frame_effects")
            .and_then(Value::as_array)
            .map(|effects| effects.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn card_faces(&self) -> Vec<&Map<String, Value>> {
        self.fields
            .get("card_faces")
            .and_then(Value::as_array)
            .map(|faces| faces.iter().filter_map(Value::as_object).collect())
            .unwrap_or_default()
    }

    /// Names of the individual faces of a multi-faced card
    pub fn face_names(&self) -> Vec<&str> {
        self.card_faces()
            .into_iter()
            .filter_map(|face| face.get("name").and_then(Value::as_str))
            .collect()
    }

    /// Image URIs of all faces on this card.
    ///
    /// For single faced cards this is just the front. Fails for records that
    /// carry no top-level images and have a face without images.
    pub fn image_uris(&self) -> Result<Vec<&ImageUris>> {
        if let Some(uris) = self.fields.get("image_uris").and_then(Value::as_object) {
            return Ok(vec![uris]);
        }

        let unknown_layout = || DecklistError::UnknownLayout {
            name: self.name().to_string(),
            layout: self.layout().to_string(),
        };

        let faces = self.card_faces();
        if faces.is_empty() {
            return Err(unknown_layout());
        }
        // Every face must carry its own images
        faces
            .into_iter()
            .map(|face| {
                face.get("image_uris")
                    .and_then(Value::as_object)
                    .ok_or_else(unknown_layout)
            })
            .collect()
    }

    /// Case-insensitive equality of a scalar field against `expected`.
    ///
    /// `expected` must already be lowercase. Non-string scalars compare by their
    /// JSON text, so `digital` matches "true"/"false". Missing, null and
    /// compound fields never match.
    pub(crate) fn field_matches(&self, field: &str, expected: &str) -> bool {
        match self.fields.get(field) {
            Some(Value::String(s)) => s.to_lowercase() == expected,
            Some(value @ (Value::Bool(_) | Value::Number(_))) => {
                value.to_string().to_lowercase() == expected
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(value: Value) -> Card {
        Card::from_value(value).unwrap()
    }

    #[test]
    fn accessors_read_scryfall_fields() {
        let c = card(json!({
            "name": "Blood Crypt",
            "set": "rna",
            "collector_number": "245",
            "lang": "en",
            "digital": false,
            "nonfoil": true,
            "highres_image": true,
            "frame": "2015",
            "border_color": "black",
            "frame_effects": ["legendary"],
            "layout": "normal"
        }));

        assert_eq!(c.name(), "Blood Crypt");
        assert_eq!(c.set(), "rna");
        assert_eq!(c.collector_number(), "245");
        assert_eq!(c.lang(), Some("en"));
        assert!(!c.digital());
        assert!(c.nonfoil());
        assert!(c.highres_image());
        assert_eq!(c.frame(), Some("2015"));
        assert_eq!(c.border_color(), Some("black"));
        assert_eq!(c.frame_effects(), vec!["legendary"]);
        assert_eq!(c.layout(), "normal");
        assert!(c.has("layout"));
        assert!(!c.has("oracle_id"));
    }

    #[test]
    fn missing_fields_fall_back() {
        let c = card(json!({}));
        assert_eq!(c.name(), "");
        assert_eq!(c.layout(), "unknown");
        assert!(c.frame_effects().is_empty());
        assert!(c.card_faces().is_empty());
        assert!(!c.nonfoil());
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Card::from_value(json!("Blood Crypt")).is_none());
        assert!(Card::from_value(json!([1, 2])).is_none());
    }

    #[test]
    fn image_uris_single_faced() {
        let c = card(json!({
            "name": "Black Lotus",
            "layout": "normal",
            "image_uris": { "normal": "https://example.com/normal.jpg" }
        }));

        let uris = c.image_uris().unwrap();
        assert_eq!(uris.len(), 1);
        assert_eq!(uris[0]["normal"], "https://example.com/normal.jpg");
    }

    #[test]
    fn image_uris_double_faced() {
        let c = card(json!({
            "name": "Delver of Secrets // Insectile Aberration",
            "layout": "transform",
            "card_faces": [
                { "name": "Delver of Secrets", "image_uris": { "normal": "https://example.com/front.jpg" } },
                { "name": "Insectile Aberration", "image_uris": { "normal": "https://example.com/back.jpg" } }
            ]
        }));

        let uris = c.image_uris().unwrap();
        assert_eq!(uris.len(), 2);
        assert_eq!(uris[0]["normal"], "https://example.com/front.jpg");
        assert_eq!(uris[1]["normal"], "https://example.com/back.jpg");
        assert_eq!(c.face_names(), vec!["Delver of Secrets", "Insectile Aberration"]);
    }

    #[test]
    fn image_uris_unknown_layout_is_an_error() {
        // Faces without images and no top-level image_uris either
        let c = card(json!({
            "name": "Fire // Ice",
            "layout": "art_series",
            "card_faces": [{ "name": "Fire" }, { "name": "Ice" }]
        }));

        match c.image_uris() {
            Err(DecklistError::UnknownLayout { name, layout }) => {
                assert_eq!(name, "Fire // Ice");
                assert_eq!(layout, "art_series");
            }
            other => panic!("expected UnknownLayout, got {:?}", other),
        }
    }

    #[test]
    fn image_uris_face_without_images_is_an_error() {
        let c = card(json!({
            "name": "Delver of Secrets // Insectile Aberration",
            "layout": "transform",
            "card_faces": [
                { "name": "Delver of Secrets", "image_uris": { "normal": "https://example.com/front.jpg" } },
                { "name": "Insectile Aberration" }
            ]
        }));

        assert!(matches!(
            c.image_uris(),
            Err(DecklistError::UnknownLayout { .. })
        ));
    }

    #[test]
    fn field_matches_is_case_insensitive() {
        let c = card(json!({ "set": "RNA", "digital": false, "mtgo_id": 123 }));
        assert!(c.field_matches("set", "rna"));
        assert!(c.field_matches("digital", "false"));
        assert!(c.field_matches("mtgo_id", "123"));
        assert!(!c.field_matches("set", "grn"));
        assert!(!c.field_matches("name", "rna"));
    }
}
