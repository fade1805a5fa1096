//! Print recommendation
//!
//! Ranks all prints of a card by [`score`] and either picks the best one or
//! returns the full ranking with the current print pinned first.

use super::score::score;
use crate::card::Card;
use crate::database::CardDatabase;
use std::cmp::Ordering;
use std::sync::Arc;

/// A card reference to recommend prints for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintQuery<'a> {
    pub name: &'a str,
    pub set: Option<&'a str>,
    pub collector_number: Option<&'a str>,
    pub oracle_id: Option<&'a str>,
}

impl<'a> PrintQuery<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// The print currently in use
    pub fn with_print(mut self, set: &'a str, collector_number: &'a str) -> Self {
        self.set = Some(set);
        self.collector_number = Some(collector_number);
        self
    }

    pub fn with_oracle_id(mut self, oracle_id: &'a str) -> Self {
        self.oracle_id = Some(oracle_id);
        self
    }
}

/// A print together with its score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPrint {
    pub card: Arc<Card>,
    pub score: u32,
}

impl ScoredPrint {
    fn new(card: Arc<Card>) -> Self {
        let score = score(&card);
        Self { card, score }
    }
}

pub struct PrintRecommender<'a> {
    database: &'a CardDatabase,
}

impl<'a> PrintRecommender<'a> {
    pub fn new(database: &'a CardDatabase) -> Self {
        Self { database }
    }

    /// The print named by the query, if it has both set and collector number
    pub fn current_print(&self, query: &PrintQuery<'_>) -> Option<Arc<Card>> {
        match (query.set, query.collector_number) {
            (Some(set), Some(collector_number)) => {
                self.database
                    .get_card(query.name, Some(set), Some(collector_number))
            }
            _ => None,
        }
    }

    /// All prints sharing the query's name (and oracle ID), best first.
    ///
    /// Equal scores are ordered by set code, then collector number in natural
    /// order, then database order.
    pub fn ranked_alternatives(&self, query: &PrintQuery<'_>) -> Vec<ScoredPrint> {
        let mut ranked: Vec<ScoredPrint> = self
            .database
            .get_cards(&[("name", Some(query.name)), ("oracle_id", query.oracle_id)])
            .into_iter()
            .map(ScoredPrint::new)
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.card.set().cmp(b.card.set()))
                .then_with(|| {
                    collector_number_order(a.card.collector_number(), b.card.collector_number())
                })
        });

        ranked
    }

    /// The best print of the card, or `None` if the current print is already
    /// as good as any alternative (or there are no prints at all).
    pub fn recommend_best(&self, query: &PrintQuery<'_>) -> Option<Arc<Card>> {
        let ranked = self.ranked_alternatives(query);
        let best = ranked.first()?;

        if let Some(current) = self.current_print(query) {
            if score(&current) >= best.score {
                log::debug!(
                    "{} ({}) {} is already the best print",
                    current.name(),
                    current.set(),
                    current.collector_number()
                );
                return None;
            }
        }

        Some(Arc::clone(&best.card))
    }

    /// All prints in descending score order, with the current print first
    pub fn recommend_all_scored(&self, query: &PrintQuery<'_>) -> Vec<ScoredPrint> {
        let mut ranked = self.ranked_alternatives(query);

        if let Some(current) = self.current_print(query) {
            if let Some(index) = ranked.iter().position(|p| p.card == current) {
                ranked.remove(index);
            }
            ranked.insert(0, ScoredPrint::new(current));
        }

        ranked
    }

    pub fn recommend_all(&self, query: &PrintQuery<'_>) -> Vec<Arc<Card>> {
        self.recommend_all_scored(query)
            .into_iter()
            .map(|p| p.card)
            .collect()
    }
}

/// Compare collector numbers by numeric prefix first ("9" < "10" < "10a")
fn collector_number_order(a: &str, b: &str) -> Ordering {
    match (numeric_prefix(a), numeric_prefix(b)) {
        (Some((a_num, a_rest)), Some((b_num, b_rest))) => {
            a_num.cmp(&b_num).then_with(|| a_rest.cmp(b_rest))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn numeric_prefix(collector_number: &str) -> Option<(u64, &str)> {
    let end = collector_number
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(collector_number.len());
    let number = collector_number[..end].parse().ok()?;
    Some((number, &collector_number[end..]))
}

#[cfg(test)]
#[path = "recommender_tests.rs"]
mod tests;
