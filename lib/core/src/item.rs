use serde::{Deserialize, Serialize};
use std::fmt;
use crate::vector::Vector;

/// Stock availability tag.
///
/// Serialized as its plain string form so unknown tags round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    InStock,
    LowStock,
    OutOfStock,
    Other(String),
}

impl Availability {
    pub fn as_str(&self) -> &str {
        match self {
            Availability::InStock => "in_stock",
            Availability::LowStock => "low_stock",
            Availability::OutOfStock => "out_of_stock",
            Availability::Other(s) => s,
        }
    }
}

impl From<&str> for Availability {
    fn from(s: &str) -> Self {
        match s {
            "in_stock" => Availability::InStock,
            "low_stock" => Availability::LowStock,
            "out_of_stock" => Availability::OutOfStock,
            other => Availability::Other(other.to_string()),
        }
    }
}

impl From<String> for Availability {
    fn from(s: String) -> Self {
        match s.as_str() {
            "in_stock" | "low_stock" | "out_of_stock" => Availability::from(s.as_str()),
            _ => Availability::Other(s),
        }
    }
}

impl From<Availability> for String {
    fn from(a: Availability) -> Self {
        match a {
            Availability::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog item supplied with a ranking request.
///
/// Items are owned by the request; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub embedding: Option<Vector>,
    /// Accepted and echoed back, not used for scoring yet
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Item {
    /// Create an item with only the required fields set
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            category: None,
            price: None,
            rating: None,
            review_count: None,
            availability: None,
            stock_quantity: None,
            embedding: None,
            created_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_availability(mut self, availability: impl Into<Availability>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    pub fn with_embedding(mut self, embedding: impl Into<Vector>) -> Self {
        self.embedding = Some(embedding.into());
        self
    }

    /// Price usable for scoring and filtering.
    ///
    /// A price of exactly zero counts as absent.
    pub fn effective_price(&self) -> Option<f64> {
        self.price.filter(|p| *p != 0.0)
    }

    /// Availability usable for stock scoring; an empty tag counts as absent.
    pub fn effective_availability(&self) -> Option<&Availability> {
        self.availability
            .as_ref()
            .filter(|a| !a.as_str().is_empty())
    }

    /// Embedding usable for similarity; an empty vector counts as absent.
    pub fn effective_embedding(&self) -> Option<&Vector> {
        self.embedding.as_ref().filter(|v| !v.is_empty())
    }

    /// Lowercased `title description category` text used for keyword matching
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}
