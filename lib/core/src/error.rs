use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that propagate to the caller.
///
/// Degenerate scoring inputs (mismatched dimensions, zero vectors, missing
/// attributes) never show up here; they resolve to fallback scores.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Embedding model unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
