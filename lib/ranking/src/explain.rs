//! Human-readable explanations for scored items
//!
//! An explanation is a list of short clauses joined with [`SEPARATOR`].
//! Clause groups are evaluated in a fixed order (matched terms, rating,
//! price, stock, semantic); within a group only the highest threshold fires.

use cartrank_core::{Availability, Item};

pub const SEPARATOR: &str = " • ";
pub const FALLBACK: &str = "Relevant to your search";
/// Explanation attached to similarity-only results
pub const SIMILAR_EXPLANATION: &str = "Similar to viewed product";

pub const HIGH_RATING: f64 = 4.5;
pub const GOOD_RATING: f64 = 4.0;
pub const GREAT_VALUE_PRICE_SCORE: f64 = 0.7;
pub const GOOD_PRICE_SCORE: f64 = 0.5;
pub const STRONG_SEMANTIC_SCORE: f64 = 0.8;
pub const GOOD_SEMANTIC_SCORE: f64 = 0.6;

/// Builds the explanation for one item.
///
/// `semantic_score` and `price_score` are the unrounded component values.
pub fn explain(
    item: &Item,
    semantic_score: f64,
    price_score: f64,
    matched_terms: &[String],
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !matched_terms.is_empty() {
        parts.push(format!("Matches: {}", matched_terms.join(", ")));
    }

    match item.rating {
        Some(r) if r >= HIGH_RATING => parts.push(format!("Highly rated ({:.1}★)", r)),
        Some(r) if r >= GOOD_RATING => parts.push(format!("Well rated ({:.1}★)", r)),
        _ => {}
    }

    if price_score > GREAT_VALUE_PRICE_SCORE {
        parts.push("Great value".to_string());
    } else if price_score > GOOD_PRICE_SCORE {
        parts.push("Good price".to_string());
    }

    match item.availability {
        Some(Availability::InStock) => parts.push("In stock".to_string()),
        Some(Availability::LowStock) => parts.push("Limited stock".to_string()),
        _ => {}
    }

    if semantic_score > STRONG_SEMANTIC_SCORE {
        parts.push("Strong semantic match".to_string());
    } else if semantic_score > GOOD_SEMANTIC_SCORE {
        parts.push("Good semantic match".to_string());
    }

    if parts.is_empty() {
        FALLBACK.to_string()
    } else {
        parts.join(SEPARATOR)
    }
}
