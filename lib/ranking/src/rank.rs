//! Ranking of scored items
//!
//! Sorting is stable: items with equal sort keys keep their input order, so
//! identical requests always produce identical rankings.

use crate::score::ScoreBreakdown;
use cartrank_core::Item;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default result limit for full search
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
/// Default result limit for similar-item lookups
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// An item with its score breakdown and 1-based position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub product: Item,
    pub score_breakdown: ScoreBreakdown,
    pub rank: usize,
}

impl RankedResult {
    pub fn id(&self) -> i64 {
        self.product.id
    }

    pub fn final_score(&self) -> f64 {
        self.score_breakdown.final_score
    }
}

/// Sorts, ranks and truncates scored items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_LIMIT)
    }
}

impl Ranker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank by final score, descending
    pub fn rank(&self, scored: Vec<(Item, ScoreBreakdown)>) -> Vec<RankedResult> {
        self.rank_by_key(
            scored
                .into_iter()
                .map(|(item, breakdown)| (breakdown.final_score, item, breakdown))
                .collect(),
        )
    }

    /// Rank by an explicit sort key, descending.
    ///
    /// The key is separate from the breakdown so callers can order by a value
    /// the breakdown does not carry verbatim.
    pub fn rank_by_key(&self, mut keyed: Vec<(f64, Item, ScoreBreakdown)>) -> Vec<RankedResult> {
        // sort_by is stable
        keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        keyed
            .into_iter()
            .take(self.limit)
            .enumerate()
            .map(|(i, (_, product, score_breakdown))| RankedResult {
                product,
                score_breakdown,
                rank: i + 1,
            })
            .collect()
    }
}
