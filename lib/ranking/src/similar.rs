//! Similarity-only ranking for "more like this" lookups
//!
//! Candidates are ordered by raw cosine similarity to a reference embedding.
//! The attached breakdown carries display values only; none of them affect
//! the order.

use crate::explain::SIMILAR_EXPLANATION;
use crate::price::NEUTRAL_PRICE_SCORE;
use crate::rank::{RankedResult, Ranker, DEFAULT_SIMILAR_LIMIT};
use crate::score::{rating_score, round4, ScoreBreakdown, RECENCY_SCORE};
use cartrank_core::{cosine_similarity, Availability, Item, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityFinder {
    exclude_id: Option<i64>,
    limit: usize,
}

impl Default for SimilarityFinder {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILAR_LIMIT)
    }
}

impl SimilarityFinder {
    pub fn new(limit: usize) -> Self {
        Self { exclude_id: None, limit }
    }

    /// Skip the item with this id (usually the reference item itself).
    ///
    /// An id of 0 means "nothing to exclude".
    pub fn exclude(mut self, id: Option<i64>) -> Self {
        self.exclude_id = id.filter(|id| *id != 0);
        self
    }

    /// Rank `items` by similarity to `reference`.
    ///
    /// Items without an embedding are not candidates.
    pub fn find(&self, reference: &Vector, items: Vec<Item>) -> Vec<RankedResult> {
        let keyed: Vec<(f64, Item, ScoreBreakdown)> = items
            .into_iter()
            .filter(|item| Some(item.id) != self.exclude_id)
            .filter_map(|item| {
                let similarity = cosine_similarity(
                    reference.as_slice(),
                    item.effective_embedding()?.as_slice(),
                );
                let breakdown = display_breakdown(&item, similarity);
                Some((similarity, item, breakdown))
            })
            .collect();

        Ranker::new(self.limit).rank_by_key(keyed)
    }
}

fn display_breakdown(item: &Item, similarity: f64) -> ScoreBreakdown {
    let stock_score = match item.availability {
        Some(Availability::InStock) => 1.0,
        _ => 0.5,
    };
    ScoreBreakdown {
        semantic_score: round4(similarity),
        rating_score: round4(rating_score(item.rating)),
        price_score: NEUTRAL_PRICE_SCORE,
        stock_score,
        recency_score: RECENCY_SCORE,
        final_score: round4(similarity),
        matched_terms: Vec::new(),
        explanation: SIMILAR_EXPLANATION.to_string(),
    }
}
