//! Print desirability score
//!
//! Every criterion is worth a distinct power of two, so a higher-weighted
//! criterion outranks all lower ones combined.

use crate::card::Card;

/// Set code of the Mystery Booster reprint set
pub const MYSTERY_BOOSTER_SET: &str = "mb1";

pub const NOT_MYSTERY_BOOSTER: u32 = 1;
pub const MODERN_FRAME: u32 = 2;
pub const PAPER: u32 = 4;
pub const BLACK_BORDER: u32 = 8;
pub const REGULAR_NONFOIL: u32 = 16;
pub const HIGHRES_IMAGE: u32 = 32;
pub const ENGLISH: u32 = 64;

/// Collector number suffixes marking promo and special prints
const SPECIAL_SUFFIXES: [char; 2] = ['p', 's'];

/// Score a print; higher is better
pub fn score(card: &Card) -> u32 {
    let mut points = 0;

    if card.set() != MYSTERY_BOOSTER_SET {
        points += NOT_MYSTERY_BOOSTER;
    }
    if card.frame() == Some("2015") {
        points += MODERN_FRAME;
    }
    if !card.digital() {
        points += PAPER;
    }
    if card.border_color() == Some("black") && !card.frame_effects().contains(&"extendedart") {
        points += BLACK_BORDER;
    }
    if !has_special_suffix(card.collector_number()) && card.nonfoil() {
        points += REGULAR_NONFOIL;
    }
    if card.highres_image() {
        points += HIGHRES_IMAGE;
    }
    if card.lang() == Some("en") {
        points += ENGLISH;
    }

    points
}

fn has_special_suffix(collector_number: &str) -> bool {
    collector_number
        .chars()
        .last()
        .is_some_and(|c| SPECIAL_SUFFIXES.contains(&c))
}
