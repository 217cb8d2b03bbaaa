//! Composite scoring
//!
//! Computes the five component scores for one item and combines them with the
//! request's [`Weights`]. Components and the final score are rounded to four
//! decimal places in the resulting [`ScoreBreakdown`]; the explanation is
//! derived from the unrounded values.

use crate::explain::explain;
use crate::price::PriceNormalizer;
use crate::text::QueryTerms;
use crate::weights::Weights;
use cartrank_core::{cosine_similarity, Availability, Item, Vector};
use serde::{Deserialize, Serialize};

/// Semantic bonus per matched query term
pub const KEYWORD_BOOST_STEP: f64 = 0.15;
/// Upper bound on the total keyword bonus
pub const KEYWORD_BOOST_CAP: f64 = 0.5;
pub const MAX_RATING: f64 = 5.0;
/// Stock score for availability tags outside the known vocabulary
pub const UNKNOWN_STOCK_SCORE: f64 = 0.5;
/// Recency is not derived from `created_at` yet
pub const RECENCY_SCORE: f64 = 0.5;

/// Scores for one item against one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub semantic_score: f64,
    pub rating_score: f64,
    pub price_score: f64,
    pub stock_score: f64,
    pub recency_score: f64,
    pub final_score: f64,
    pub matched_terms: Vec<String>,
    pub explanation: String,
}

/// Round to four decimal places.
///
/// Rounds the exact decimal expansion of `value`, so ties go to even and
/// values stored just below a tie round down.
pub fn round4(value: f64) -> f64 {
    format!("{:.4}", value).parse().unwrap_or(value)
}

/// `min(step * matched, cap)`
#[inline]
pub fn keyword_boost(matched: usize) -> f64 {
    (KEYWORD_BOOST_STEP * matched as f64).min(KEYWORD_BOOST_CAP)
}

/// Rating over five. Ratings above five are not clamped.
#[inline]
pub fn rating_score(rating: Option<f64>) -> f64 {
    rating.unwrap_or(0.0) / MAX_RATING
}

/// Stock score. A missing availability counts as in stock.
pub fn stock_score(availability: Option<&Availability>) -> f64 {
    match availability.unwrap_or(&Availability::InStock) {
        Availability::InStock => 1.0,
        Availability::LowStock => 0.5,
        Availability::OutOfStock => 0.0,
        Availability::Other(_) => UNKNOWN_STOCK_SCORE,
    }
}

/// Scores items for a single search request
#[derive(Debug, Clone)]
pub struct ScoreCalculator<'a> {
    query_vector: &'a Vector,
    terms: QueryTerms,
    weights: Weights,
    prices: PriceNormalizer,
}

impl<'a> ScoreCalculator<'a> {
    pub fn new(
        query: &str,
        query_vector: &'a Vector,
        weights: Weights,
        prices: PriceNormalizer,
    ) -> Self {
        Self {
            query_vector,
            terms: QueryTerms::parse(query),
            weights,
            prices,
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Raw cosine similarity to the query, 0.0 without an embedding
    pub fn similarity(&self, item: &Item) -> f64 {
        item.effective_embedding()
            .map(|e| cosine_similarity(self.query_vector.as_slice(), e.as_slice()))
            .unwrap_or(0.0)
    }

    pub fn score(&self, item: &Item) -> ScoreBreakdown {
        let matched_terms = self.terms.matched_in(item);
        let semantic = (self.similarity(item) + keyword_boost(matched_terms.len())).min(1.0);
        let rating = rating_score(item.rating);
        let price = self.prices.score(item);
        let stock = stock_score(item.effective_availability());
        let recency = RECENCY_SCORE;

        let final_score = self.weights.combine(semantic, rating, price, stock, recency);
        let explanation = explain(item, semantic, price, &matched_terms);

        ScoreBreakdown {
            semantic_score: round4(semantic),
            rating_score: round4(rating),
            price_score: round4(price),
            stock_score: round4(stock),
            recency_score: round4(recency),
            final_score: round4(final_score),
            matched_terms,
            explanation,
        }
    }
}
