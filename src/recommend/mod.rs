//! Print scoring and recommendation

mod recommender;
mod score;

pub use recommender::{PrintQuery, PrintRecommender, ScoredPrint};
pub use score::{score, MYSTERY_BOOSTER_SET};
