//! Request handling independent of the transport.

use crate::embedder::ModelHandle;
use crate::types::*;
use cartrank_core::{CandidateFilter, Result};
use cartrank_ranking::{search, SearchOptions, SimilarityFinder};
use std::time::Instant;
use tracing::debug;

pub const SERVICE_NAME: &str = "cartrank";

#[derive(Debug, Clone)]
pub struct RankingService {
    model: ModelHandle,
}

impl RankingService {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    pub fn info(&self) -> ServiceInfo {
        ServiceInfo {
            service: SERVICE_NAME.to_string(),
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy".to_string(),
            model_loaded: self.model.is_loaded(),
            model_name: self
                .model
                .loaded_model_name()
                .unwrap_or_else(|| "not loaded".to_string()),
        }
    }

    pub fn preload(&self) -> Result<PreloadResponse> {
        let provider = self.model.get()?;
        Ok(PreloadResponse {
            status: "success".to_string(),
            message: "Model loaded successfully".to_string(),
            model_name: provider.model_name().to_string(),
        })
    }

    pub fn embed(&self, req: EmbeddingRequest) -> Result<EmbeddingResponse> {
        let embedding = self.model.get()?.embed(&req.text)?;
        Ok(EmbeddingResponse {
            dimension: embedding.dim(),
            embedding,
        })
    }

    pub fn embed_batch(&self, req: BatchEmbeddingRequest) -> Result<BatchEmbeddingResponse> {
        let embeddings = self.model.get()?.embed_batch(&req.texts)?;
        Ok(BatchEmbeddingResponse {
            dimension: embeddings.first().map(|e| e.dim()).unwrap_or(0),
            count: embeddings.len(),
            embeddings,
        })
    }

    pub fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();
        let query_embedding = self.model.get()?.embed(&req.query)?;

        let options = SearchOptions::default()
            .with_weights(req.weights.unwrap_or_default())
            .with_limit(req.limit)
            .with_filter(CandidateFilter::from_options(
                req.category.as_deref(),
                req.min_price,
                req.max_price,
            ));
        let results = search(&req.query, &query_embedding, req.products, &options);
        let response_time_ms = start.elapsed().as_millis() as u64;
        debug!(results = results.len(), response_time_ms, "Search complete");

        Ok(SearchResponse {
            total_results: results.len(),
            results,
            query: req.query,
            query_embedding,
            response_time_ms,
        })
    }

    pub fn similar(&self, req: SimilarRequest) -> SimilarResponse {
        let similar_products = SimilarityFinder::new(req.limit)
            .exclude(req.exclude_id)
            .find(&req.product_embedding, req.products);
        SimilarResponse { similar_products }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartrank_core::{Error, Item, Vector};
    use std::sync::Arc;

    fn service() -> RankingService {
        RankingService::new(ModelHandle::hashing(64))
    }

    #[test]
    fn test_health_before_and_after_preload() {
        let svc = service();
        let health = svc.health();
        assert!(!health.model_loaded);
        assert_eq!(health.model_name, "not loaded");

        let preload = svc.preload().unwrap();
        assert_eq!(preload.status, "success");

        let health = svc.health();
        assert!(health.model_loaded);
        assert_eq!(health.model_name, preload.model_name);
    }

    fn svc_embed_batch(texts: Vec<String>) -> BatchEmbeddingResponse {
        service().embed_batch(BatchEmbeddingRequest { texts }).unwrap()
    }

    #[test]
    fn test_embed_batch_empty() {
        let resp = svc_embed_batch(Vec::new());
        assert_eq!(resp.count, 0);
        assert_eq!(resp.dimension, 0);
    }

    #[test]
    fn test_embed_batch_dimension() {
        let resp = svc_embed_batch(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(resp.count, 2);
        assert_eq!(resp.dimension, 64);
    }

    #[test]
    fn test_search_uses_provider_embedding() {
        let svc = service();
        let provider = svc.model().get().unwrap();
        let shoes = provider.embed("Red Running Shoes").unwrap();
        let kettle = provider.embed("Stainless Kettle").unwrap();

        let req = SearchRequest {
            query: "red shoes".to_string(),
            products: vec![
                Item::new(1, "Stainless Kettle").with_embedding(kettle),
                Item::new(2, "Red Running Shoes").with_embedding(shoes),
            ],
            weights: None,
            limit: 20,
            min_price: None,
            max_price: None,
            category: None,
        };
        let resp = svc.search(req).unwrap();
        assert_eq!(resp.total_results, 2);
        assert_eq!(resp.results[0].product.id, 2);
        assert_eq!(resp.query, "red shoes");
        assert_eq!(resp.query_embedding.dim(), 64);
    }

    #[test]
    fn test_search_propagates_provider_failure() {
        let svc = RankingService::new(ModelHandle::new(|| {
            Err(Error::EmbeddingUnavailable("offline".to_string()))
        }));
        let req = SearchRequest {
            query: "x".to_string(),
            products: Vec::new(),
            weights: None,
            limit: 20,
            min_price: None,
            max_price: None,
            category: None,
        };
        assert!(svc.search(req).is_err());
        assert!(!svc.health().model_loaded);
    }

    #[test]
    fn test_similar_does_not_load_model() {
        let svc = service();
        let resp = svc.similar(SimilarRequest {
            product_embedding: Vector::new(vec![1.0, 0.0]),
            products: vec![Item::new(1, "a").with_embedding(vec![1.0, 0.0])],
            exclude_id: None,
            limit: 5,
        });
        assert_eq!(resp.similar_products.len(), 1);
        assert!(!svc.model().is_loaded());
    }

    #[test]
    fn test_handles_share_model() {
        let svc = service();
        let clone = svc.clone();
        let _ = clone.preload().unwrap();
        assert!(svc.health().model_loaded);
        assert!(Arc::ptr_eq(&svc.model().get().unwrap(), &clone.model().get().unwrap()));
    }
}
