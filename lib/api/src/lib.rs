//! # cartrank API
//!
//! HTTP surface for the cartrank ranking engine plus the embedding provider
//! it depends on.
//!
//! - [`embedder`] - provider trait, built-in hashing embedder, lazy [`ModelHandle`]
//! - [`service`] - transport-independent request handling
//! - [`rest`] - actix-web routes

pub mod embedder;
pub mod types;
pub mod service;
pub mod rest;

pub use embedder::{EmbeddingProvider, HashingEmbedder, ModelHandle, DEFAULT_EMBEDDING_DIM};
pub use service::RankingService;
pub use rest::RestApi;
