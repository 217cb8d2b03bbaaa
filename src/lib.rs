//! # cartrank
//!
//! An explainable multi-factor ranking engine for product catalogs.
//!
//! Given a query embedding and a set of candidate items, cartrank computes a
//! deterministic composite score per item, a breakdown of the contributing
//! factors and a short human-readable explanation, then returns a ranked,
//! truncated list.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install cartrank
//! cartrank --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use cartrank::prelude::*;
//!
//! let query = Vector::new(vec![1.0, 0.0]);
//! let items = vec![
//!     Item::new(1, "Red Running Shoes").with_price(50.0).with_rating(4.8),
//!     Item::new(2, "Blue Jacket").with_price(30.0).with_rating(4.0),
//! ];
//!
//! let options = SearchOptions::default()
//!     .with_weights(Weights::default())
//!     .with_limit(10);
//! let results = search("red shoes", &query, items, &options);
//! assert_eq!(results[0].product.id, 1);
//! ```
//!
//! ## Crate Structure
//!
//! - `cartrank-core` - Vectors, cosine similarity, items, candidate filters
//! - `cartrank-ranking` - Scoring, explanations, ranking, similar-item lookup
//! - `cartrank-api` - Embedding providers and the REST API

// Re-export core types
pub use cartrank_core::{
    cosine_similarity, Availability, CandidateFilter, Error, FilterCondition, Item,
    Result, Vector,
};

// Re-export ranking
pub use cartrank_ranking::{
    explain, matched_terms, search, PriceBounds, PriceNormalizer, QueryTerms, RankedResult,
    Ranker, ScoreBreakdown, ScoreCalculator, SearchOptions, SimilarityFinder, Weights,
};

// Re-export API
pub use cartrank_api::{EmbeddingProvider, HashingEmbedder, ModelHandle, RankingService, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        search, Availability, CandidateFilter, EmbeddingProvider, Error, Item, ModelHandle,
        RankedResult, RankingService, Result, ScoreBreakdown, SearchOptions, SimilarityFinder,
        Vector, Weights,
    };
}
