//! Keyword matching between a query and item text
//!
//! Query terms are the unique whitespace tokens of the lowercased query, kept
//! in first-occurrence order. A term matches an item when it is longer than
//! [`MIN_TERM_LEN`] characters and appears as a substring of the item's
//! lowercased `title description category` text.

use ahash::AHashSet;
use cartrank_core::Item;

/// Terms of this many characters or fewer never match
pub const MIN_TERM_LEN: usize = 2;

/// Tokenized query, computed once per request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    terms: Vec<String>,
}

impl QueryTerms {
    pub fn parse(query: &str) -> Self {
        let lowered = query.to_lowercase();
        let mut seen = AHashSet::new();
        let terms = lowered
            .split_whitespace()
            .filter(|t| seen.insert(*t))
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms found in the item's text, in query order
    pub fn matched_in(&self, item: &Item) -> Vec<String> {
        if self.terms.is_empty() {
            return Vec::new();
        }
        let haystack = item.search_text();
        self.terms
            .iter()
            .filter(|t| t.chars().count() > MIN_TERM_LEN && haystack.contains(t.as_str()))
            .cloned()
            .collect()
    }
}

/// Query terms that occur in the item's text
pub fn matched_terms(query: &str, item: &Item) -> Vec<String> {
    QueryTerms::parse(query).matched_in(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dedups_in_first_occurrence_order() {
        let terms = QueryTerms::parse("Red shoes RED  running\tshoes");
        assert_eq!(terms.terms(), &["red", "shoes", "running"]);
    }

    #[test]
    fn test_matched_terms_basic() {
        let item = Item::new(1, "Red Running Shoes");
        assert_eq!(matched_terms("red shoes", &item), vec!["red", "shoes"]);
    }

    #[test]
    fn test_short_terms_never_match() {
        let item = Item::new(1, "A TV on a stand");
        assert!(matched_terms("a tv on", &item).is_empty());
    }

    #[test]
    fn test_substring_match_across_fields() {
        let item = Item::new(1, "Trail Runner")
            .with_description("Waterproof upper")
            .with_category("Footwear");
        assert_eq!(
            matched_terms("water foot run", &item),
            vec!["water", "foot", "run"]
        );
    }

    #[test]
    fn test_no_match() {
        let item = Item::new(1, "Blue Jacket");
        assert!(matched_terms("red shoes", &item).is_empty());
    }

    #[test]
    fn test_empty_query() {
        let item = Item::new(1, "Blue Jacket");
        assert!(QueryTerms::parse("   ").is_empty());
        assert!(matched_terms("", &item).is_empty());
    }

    #[test]
    fn test_length_counts_characters() {
        // three characters, more than two bytes each
        let item = Item::new(1, "Café ééé");
        assert_eq!(matched_terms("ééé", &item), vec!["ééé"]);
    }
}
