//! Ranking weights
//!
//! Coefficients of the composite score:
//!
//! ```text
//! score = alpha*semantic + beta*rating + gamma*price + delta*stock + epsilon*recency
//! ```
//!
//! Weights are taken as supplied. They are not normalized and negative
//! values are not rejected; choosing sane weights is up to the caller.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ALPHA: f64 = 0.5;
pub const DEFAULT_BETA: f64 = 0.2;
pub const DEFAULT_GAMMA: f64 = 0.15;
pub const DEFAULT_DELTA: f64 = 0.1;
pub const DEFAULT_EPSILON: f64 = 0.05;

/// Per-request weights for the five score components
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weights {
    /// Semantic similarity weight
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Rating weight
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Price weight (cheaper scores higher)
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    /// Stock availability weight
    #[serde(default = "default_delta")]
    pub delta: f64,
    /// Recency weight
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_beta() -> f64 {
    DEFAULT_BETA
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

fn default_delta() -> f64 {
    DEFAULT_DELTA
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
            delta: DEFAULT_DELTA,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Weights {
    pub fn new(alpha: f64, beta: f64, gamma: f64, delta: f64, epsilon: f64) -> Self {
        Self { alpha, beta, gamma, delta, epsilon }
    }

    /// Weighted sum of the five components, in formula order
    pub fn combine(
        &self,
        semantic: f64,
        rating: f64,
        price: f64,
        stock: f64,
        recency: f64,
    ) -> f64 {
        self.alpha * semantic
            + self.beta * rating
            + self.gamma * price
            + self.delta * stock
            + self.epsilon * recency
    }

    /// Sum of all coefficients
    pub fn total(&self) -> f64 {
        self.alpha + self.beta + self.gamma + self.delta + self.epsilon
    }
}
