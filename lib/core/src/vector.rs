use serde::{Deserialize, Serialize};
use tracing::warn;

/// A dense embedding vector
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Zero vector of the given dimension
    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }

    /// Euclidean norm, accumulated in f64
    #[inline]
    pub fn norm(&self) -> f64 {
        norm(&self.data)
    }

    /// Compute cosine similarity with another vector
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        cosine_similarity(&self.data, &other.data)
    }

    /// Normalize the vector to unit length
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f64::from(f32::EPSILON) {
            let inv_norm = (1.0 / norm) as f32;
            for x in &mut self.data {
                *x *= inv_norm;
            }
        }
    }

    /// Get normalized copy
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

/// Dot product accumulated in f64. Callers must check lengths first.
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> f64 {
    // Two accumulators for better pipelining
    let mut sum1 = 0.0f64;
    let mut sum2 = 0.0f64;
    let chunks = a.len() / 2;

    for i in 0..chunks {
        let idx = i * 2;
        sum1 += f64::from(a[idx]) * f64::from(b[idx]);
        sum2 += f64::from(a[idx + 1]) * f64::from(b[idx + 1]);
    }
    if a.len() % 2 == 1 {
        let last = a.len() - 1;
        sum1 += f64::from(a[last]) * f64::from(b[last]);
    }

    sum1 + sum2
}

#[inline]
pub fn norm(v: &[f32]) -> f64 {
    dot_product(v, v).sqrt()
}

/// Cosine similarity between two embeddings.
///
/// A length mismatch is not an error: it logs a warning and yields `0.0`.
/// A zero-magnitude operand also yields `0.0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        warn!("Vector dimension mismatch: {} vs {}", a.len(), b.len());
        return 0.0;
    }

    let norm_a = norm(a);
    let norm_b = norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product(a, b) / (norm_a * norm_b)
}
