//! Embedding providers
//!
//! The ranking engine only needs "text -> vector of length D". Providers are
//! loaded lazily through a [`ModelHandle`], which guarantees a single load even
//! when the first requests arrive concurrently.

use cartrank_core::{Error, Result, Vector};
use parking_lot::Mutex;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tracing::info;

/// Default embedding dimension, same as common sentence-embedding models
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Converts text into fixed-dimension vectors
pub trait EmbeddingProvider: Send + Sync {
    fn model_name(&self) -> &str;

    fn dimension(&self) -> usize;

    fn embed(&self, text: &str) -> Result<Vector>;

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vector>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
}

/// Deterministic offline embedder.
///
/// Hashes character trigrams and whole words of the lowercased text into a
/// fixed number of buckets, then L2-normalizes. Texts sharing words and
/// trigrams land close together, which is enough for keyword-heavy catalog
/// queries without a model download.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
    name: String,
}

impl HashingEmbedder {
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidConfig(
                "embedding dimension must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            dim,
            name: format!("hashed-trigram-{}", dim),
        })
    }
}

impl EmbeddingProvider for HashingEmbedder {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Result<Vector> {
        Ok(hash_text_to_vector(text, self.dim))
    }
}

/// Hash a string to a fixed-size unit vector. Empty text gives the zero vector.
pub fn hash_text_to_vector(text: &str, dim: usize) -> Vector {
    let mut vector = vec![0.0f32; dim];
    let normalized = text.to_lowercase();

    for trigram in generate_trigrams(&normalized) {
        vector[bucket(&trigram, dim)] += 1.0;
    }

    // Words contribute more than trigrams
    for word in normalized.split_whitespace() {
        vector[bucket(word, dim)] += 2.0;
    }

    let mut vector = Vector::new(vector);
    vector.normalize();
    vector
}

fn bucket<T: Hash + ?Sized>(value: &T, dim: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    (hasher.finish() as usize) % dim
}

/// Character trigrams of each word, padded with spaces
fn generate_trigrams(s: &str) -> Vec<String> {
    let mut trigrams = Vec::new();
    for word in s.split_whitespace() {
        let padded: Vec<char> = format!(" {} ", word).chars().collect();
        trigrams.extend(padded.windows(3).map(|w| w.iter().collect::<String>()));
    }
    trigrams
}

type ProviderFactory = dyn Fn() -> Result<Arc<dyn EmbeddingProvider>> + Send + Sync;

struct HandleInner {
    provider: OnceLock<Arc<dyn EmbeddingProvider>>,
    init_lock: Mutex<()>,
    factory: Box<ProviderFactory>,
}

/// Shared, lazily initialised embedding model.
///
/// Cloning is cheap; all clones share one provider. The factory runs at most
/// once successfully: concurrent first callers wait on the same load. A failed
/// load is reported to the caller and retried by the next one.
#[derive(Clone)]
pub struct ModelHandle {
    inner: Arc<HandleInner>,
}

impl ModelHandle {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn EmbeddingProvider>> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(HandleInner {
                provider: OnceLock::new(),
                init_lock: Mutex::new(()),
                factory: Box::new(factory),
            }),
        }
    }

    /// Handle over the built-in [`HashingEmbedder`]
    pub fn hashing(dim: usize) -> Self {
        Self::new(move || Ok(Arc::new(HashingEmbedder::new(dim)?) as Arc<dyn EmbeddingProvider>))
    }

    /// Get the provider, loading it on first use
    pub fn get(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        if let Some(provider) = self.inner.provider.get() {
            return Ok(provider.clone());
        }

        let _guard = self.inner.init_lock.lock();
        if let Some(provider) = self.inner.provider.get() {
            return Ok(provider.clone());
        }

        info!("Loading embedding model...");
        let start = Instant::now();
        let provider = (self.inner.factory)().map_err(|e| match e {
            Error::EmbeddingUnavailable(_) => e,
            other => Error::EmbeddingUnavailable(other.to_string()),
        })?;
        info!(
            model = provider.model_name(),
            "Model loaded in {:.2}s",
            start.elapsed().as_secs_f64()
        );

        let provider = self.inner.provider.get_or_init(|| provider).clone();
        Ok(provider)
    }

    /// Whether the provider has been loaded. Never triggers a load.
    pub fn is_loaded(&self) -> bool {
        self.inner.provider.get().is_some()
    }

    pub fn loaded_model_name(&self) -> Option<String> {
        self.inner
            .provider
            .get()
            .map(|p| p.model_name().to_string())
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
