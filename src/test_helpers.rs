//! Card fixtures shared by unit tests

use crate::card::Card;
use crate::database::CardDatabase;
use serde_json::{json, Value};

/// An English, paper, black-bordered, modern-frame, nonfoil print with a
/// high-res scan: every scoring criterion holds.
pub(crate) fn make_test_card(name: &str, set: &str, collector_number: &str) -> Card {
    Card::from_value(json!({
        "object": "card",
        "name": name,
        "oracle_id": format!("oracle-{}", name.to_lowercase().replace(' ', "-")),
        "set": set,
        "collector_number": collector_number,
        "lang": "en",
        "digital": false,
        "frame": "2015",
        "border_color": "black",
        "frame_effects": [],
        "nonfoil": true,
        "highres_image": true,
        "layout": "normal",
        "image_uris": {
            "normal": format!("https://cards.example/{}/{}.jpg", set, collector_number)
        }
    }))
    .expect("fixture is an object")
}

/// Copy of `card` with one field replaced
pub(crate) fn with_field(card: &Card, field: &str, value: Value) -> Card {
    let mut fields = card.fields().clone();
    fields.insert(field.to_string(), value);
    Card::new(fields)
}

pub(crate) fn make_test_database(cards: Vec<Card>) -> CardDatabase {
    CardDatabase::from_cards(cards)
}
