//! # cartrank Core
//!
//! Core data model for the cartrank ranking engine.
//!
//! This crate provides the leaf building blocks:
//!
//! - [`Vector`] - Dense embedding with cosine similarity
//! - [`Item`] - A catalog item supplied with a request
//! - [`CandidateFilter`] - Category and price predicates over items
//! - [`Error`] - Failures that propagate to the caller
//!
//! ## Example
//!
//! ```rust
//! use cartrank_core::{CandidateFilter, Item, Vector};
//!
//! let items = vec![
//!     Item::new(1, "Red Running Shoes").with_category("Footwear").with_price(50.0),
//!     Item::new(2, "Blue Jacket").with_category("Outerwear").with_price(30.0),
//! ];
//! let candidates = CandidateFilter::new().category("foot").apply(items);
//! assert_eq!(candidates.len(), 1);
//!
//! let a = Vector::new(vec![1.0, 0.0]);
//! let b = Vector::new(vec![1.0, 0.0]);
//! assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-9);
//! ```

pub mod vector;
pub mod item;
pub mod error;
pub mod filter;

pub use vector::{cosine_similarity, Vector};
pub use item::{Availability, Item};
pub use error::{Error, Result};
pub use filter::{CandidateFilter, FilterCondition};
