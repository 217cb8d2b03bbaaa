// Candidate filtering on item attributes
use crate::Item;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterCondition {
    /// Case-insensitive substring match on the item category
    CategoryContains(String),
    /// Price at or above the bound
    MinPrice(f64),
    /// Price at or below the bound
    MaxPrice(f64),
}

impl FilterCondition {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            FilterCondition::CategoryContains(needle) => item
                .category
                .as_deref()
                .map(|c| c.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
            // Zero or missing prices never pass a price bound
            FilterCondition::MinPrice(bound) => item
                .effective_price()
                .map(|p| p >= *bound)
                .unwrap_or(false),
            FilterCondition::MaxPrice(bound) => item
                .effective_price()
                .map(|p| p <= *bound)
                .unwrap_or(false),
        }
    }
}

/// Narrows a request's items to the candidate set.
///
/// Only the predicates that were supplied take part; an empty filter keeps
/// every item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateFilter {
    conditions: Vec<FilterCondition>,
}

impl CandidateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from the optional request predicates.
    ///
    /// An empty category string is treated as "no category filter".
    pub fn from_options(
        category: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Self {
        let mut filter = Self::new();
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            filter = filter.category(category);
        }
        if let Some(min) = min_price {
            filter = filter.min_price(min);
        }
        if let Some(max) = max_price {
            filter = filter.max_price(max);
        }
        filter
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.conditions
            .push(FilterCondition::CategoryContains(category.into()));
        self
    }

    pub fn min_price(mut self, bound: f64) -> Self {
        self.conditions.push(FilterCondition::MinPrice(bound));
        self
    }

    pub fn max_price(mut self, bound: f64) -> Self {
        self.conditions.push(FilterCondition::MaxPrice(bound));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    /// Whether `item` satisfies every condition
    pub fn matches(&self, item: &Item) -> bool {
        self.conditions.iter().all(|c| c.matches(item))
    }

    /// Keep matching items, preserving input order
    pub fn apply(&self, items: Vec<Item>) -> Vec<Item> {
        if self.conditions.is_empty() {
            return items;
        }
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}
