//! Full search pipeline
//!
//! filter -> price bounds -> per-item scoring -> stable rank -> truncate.
//! Scoring runs in parallel; rayon's indexed collect keeps input order, so
//! ties resolve exactly as in a sequential run.

use crate::price::PriceNormalizer;
use crate::rank::{RankedResult, Ranker, DEFAULT_SEARCH_LIMIT};
use crate::score::{ScoreBreakdown, ScoreCalculator};
use crate::weights::Weights;
use cartrank_core::{CandidateFilter, Item, Vector};
use rayon::prelude::*;
use tracing::debug;

/// Per-request search options
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub weights: Weights,
    pub limit: usize,
    pub filter: CandidateFilter,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            limit: DEFAULT_SEARCH_LIMIT,
            filter: CandidateFilter::default(),
        }
    }
}

impl SearchOptions {
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_filter(mut self, filter: CandidateFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Rank `items` against a query and its embedding
pub fn search(
    query: &str,
    query_vector: &Vector,
    items: Vec<Item>,
    options: &SearchOptions,
) -> Vec<RankedResult> {
    let total = items.len();
    let candidates = options.filter.apply(items);
    let prices = PriceNormalizer::from_candidates(&candidates);
    debug!(
        total,
        candidates = candidates.len(),
        bounds = ?prices.bounds(),
        "Scoring candidates"
    );

    let calculator = ScoreCalculator::new(query, query_vector, options.weights, prices);
    let breakdowns: Vec<ScoreBreakdown> = candidates
        .par_iter()
        .map(|item| calculator.score(item))
        .collect();

    let scored: Vec<(Item, ScoreBreakdown)> = candidates.into_iter().zip(breakdowns).collect();
    Ranker::new(options.limit).rank(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_applies_before_price_bounds() {
        let query = Vector::new(vec![1.0, 0.0]);
        let items = vec![
            Item::new(1, "Budget Lamp").with_category("Lighting").with_price(10.0),
            Item::new(2, "Desk Lamp").with_category("Lighting").with_price(40.0),
            Item::new(3, "Designer Lamp").with_category("Decor").with_price(500.0),
        ];
        let options = SearchOptions::default().with_filter(CandidateFilter::new().category("light"));
        let results = search("lamp", &query, items, &options);

        assert_eq!(results.len(), 2);
        let desk = results.iter().find(|r| r.id() == 2).unwrap();
        // 40 is the most expensive of the filtered set, not of the whole request
        assert_eq!(desk.score_breakdown.price_score, 0.0);
    }

    #[test]
    fn test_limit() {
        let query = Vector::new(vec![1.0]);
        let items: Vec<Item> = (0..30).map(|i| Item::new(i, "thing")).collect();
        let results = search("thing", &query, items, &SearchOptions::default());
        assert_eq!(results.len(), DEFAULT_SEARCH_LIMIT);

        let items: Vec<Item> = (0..30).map(|i| Item::new(i, "thing")).collect();
        let results = search("thing", &query, items, &SearchOptions::default().with_limit(3));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_equal_scores_keep_input_order_under_parallel_scoring() {
        let query = Vector::new(vec![1.0, 0.0]);
        let items: Vec<Item> = (0..500)
            .map(|i| Item::new(i, "Widget").with_embedding(vec![1.0, 0.0]))
            .collect();
        let results = search("widget", &query, items, &SearchOptions::default().with_limit(500));
        let ids: Vec<i64> = results.iter().map(RankedResult::id).collect();
        assert_eq!(ids, (0..500).collect::<Vec<i64>>());
    }

    #[test]
    fn test_empty_candidates() {
        let query = Vector::new(vec![1.0]);
        let options = SearchOptions::default().with_filter(CandidateFilter::new().min_price(5.0));
        assert!(search("x", &query, vec![Item::new(1, "free")], &options).is_empty());
    }
}
