//! # cartrank Ranking
//!
//! An explainable multi-factor ranking engine for catalog items.
//!
//! Given a query embedding and a candidate set, each item receives five
//! component scores, a weighted final score and a short explanation of why it
//! was suggested.
//!
//! ## Scoring formula
//!
//! ```text
//! score = α·semantic + β·rating + γ·price + δ·stock + ε·recency
//! ```
//!
//! - **semantic**: cosine similarity plus a keyword boost (0.15 per matched
//!   query term, at most 0.5), capped at 1.0
//! - **rating**: rating / 5
//! - **price**: 1.0 for the cheapest candidate, 0.0 for the dearest
//! - **stock**: in stock 1.0, low stock 0.5, out of stock 0.0
//! - **recency**: constant 0.5
//!
//! ## Example
//!
//! ```rust
//! use cartrank_core::{Item, Vector};
//! use cartrank_ranking::{search, SearchOptions};
//!
//! let query = Vector::new(vec![1.0, 0.0]);
//! let items = vec![
//!     Item::new(1, "Red Running Shoes").with_price(50.0).with_embedding(vec![0.9, 0.1]),
//!     Item::new(2, "Blue Jacket").with_price(30.0).with_embedding(vec![0.3, 0.9]),
//! ];
//!
//! let results = search("red shoes", &query, items, &SearchOptions::default());
//! assert_eq!(results[0].product.id, 1);
//! assert_eq!(results[0].rank, 1);
//! println!("{}", results[0].score_breakdown.explanation);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Filter    │────>│ Price bounds│────>│   Scorer    │
//! │ (category,  │     │ (candidate  │     │ (5 factors) │
//! │  price)     │     │  set)       │     └─────────────┘
//! └─────────────┘     └─────────────┘            │
//!                                                v
//!                      ┌─────────────┐     ┌─────────────┐
//!                      │   Ranker    │<────│  Explain    │
//!                      │(stable sort)│     │  (clauses)  │
//!                      └─────────────┘     └─────────────┘
//! ```

pub mod weights;
pub mod text;
pub mod price;
pub mod score;
pub mod explain;
pub mod rank;
pub mod similar;
pub mod search;

pub use weights::Weights;
pub use text::{matched_terms, QueryTerms};
pub use price::{PriceBounds, PriceNormalizer};
pub use score::{round4, ScoreBreakdown, ScoreCalculator};
pub use explain::explain;
pub use rank::{RankedResult, Ranker, DEFAULT_SEARCH_LIMIT, DEFAULT_SIMILAR_LIMIT};
pub use similar::SimilarityFinder;
pub use search::{search, SearchOptions};
