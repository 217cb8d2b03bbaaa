//! Relative price scoring across the candidate set
//!
//! Bounds come from the filtered candidates of the current request only.

use cartrank_core::Item;

/// Score used when an item has no price or no candidate has one
pub const NEUTRAL_PRICE_SCORE: f64 = 0.5;

/// Min/max price over a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Bounds over the items' effective prices, `None` if no item is priced
    pub fn from_items<'a, I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        items
            .into_iter()
            .filter_map(Item::effective_price)
            .fold(None, |acc, price| match acc {
                None => Some(Self { min: price, max: price }),
                Some(b) => Some(Self {
                    min: b.min.min(price),
                    max: b.max.max(price),
                }),
            })
    }

    pub fn spread(&self) -> f64 {
        self.max - self.min
    }

    /// Linear score where the cheapest candidate gets 1.0 and the dearest 0.0
    pub fn score(&self, price: f64) -> f64 {
        let spread = self.spread();
        if spread > 0.0 {
            1.0 - (price - self.min) / spread
        } else {
            1.0
        }
    }
}

/// Price component calculator for one request
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceNormalizer {
    bounds: Option<PriceBounds>,
}

impl PriceNormalizer {
    pub fn new(bounds: Option<PriceBounds>) -> Self {
        Self { bounds }
    }

    pub fn from_candidates(candidates: &[Item]) -> Self {
        Self::new(PriceBounds::from_items(candidates))
    }

    pub fn bounds(&self) -> Option<PriceBounds> {
        self.bounds
    }

    /// Price score for an item. Zero and missing prices are neutral.
    pub fn score(&self, item: &Item) -> f64 {
        match (self.bounds, item.effective_price()) {
            (Some(bounds), Some(price)) => bounds.score(price),
            _ => NEUTRAL_PRICE_SCORE,
        }
    }
}
