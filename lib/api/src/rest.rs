use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use crate::service::RankingService;
use crate::types::*;
use std::fmt::Display;
use std::sync::Arc;
use tracing::error;

/// Request bodies carry whole candidate lists with embeddings
pub const JSON_PAYLOAD_LIMIT: usize = 32 * 1024 * 1024;

pub struct RestApi;

impl RestApi {
    pub async fn start(
        service: Arc<RankingService>,
        host: String,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(service.clone()))
                .configure(RestApi::configure)
        })
        .bind((host, port))?
        .run()
        .await
    }

    /// Register routes and the JSON body limit
    pub fn configure(cfg: &mut web::ServiceConfig) {
        let json_config = web::JsonConfig::default()
            .limit(JSON_PAYLOAD_LIMIT)
            .error_handler(|err, _req| {
                let response = HttpResponse::BadRequest().json(ErrorResponse {
                    detail: err.to_string(),
                });
                InternalError::from_response(err, response).into()
            });
        cfg.app_data(json_config)
            .route("/", web::get().to(root))
            .route("/health", web::get().to(health))
            .route("/embed", web::post().to(embed))
            .route("/embed/batch", web::post().to(embed_batch))
            .route("/search", web::post().to(search))
            .route("/similar", web::post().to(similar))
            .route("/preload-model", web::post().to(preload_model));
    }
}

fn internal_error(context: &str, e: impl Display) -> HttpResponse {
    error!("Error in {}: {}", context, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        detail: e.to_string(),
    })
}

async fn root(service: web::Data<Arc<RankingService>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(service.info()))
}

async fn health(service: web::Data<Arc<RankingService>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(service.health()))
}

// Model loading and embedding are blocking; keep them off the worker thread.

async fn embed(
    service: web::Data<Arc<RankingService>>,
    req: web::Json<EmbeddingRequest>,
) -> ActixResult<HttpResponse> {
    let service = service.get_ref().clone();
    match web::block(move || service.embed(req.into_inner())).await {
        Ok(Ok(resp)) => Ok(HttpResponse::Ok().json(resp)),
        Ok(Err(e)) => Ok(internal_error("embedding generation", e)),
        Err(e) => Ok(internal_error("embedding generation", e)),
    }
}

async fn embed_batch(
    service: web::Data<Arc<RankingService>>,
    req: web::Json<BatchEmbeddingRequest>,
) -> ActixResult<HttpResponse> {
    let service = service.get_ref().clone();
    match web::block(move || service.embed_batch(req.into_inner())).await {
        Ok(Ok(resp)) => Ok(HttpResponse::Ok().json(resp)),
        Ok(Err(e)) => Ok(internal_error("batch embedding generation", e)),
        Err(e) => Ok(internal_error("batch embedding generation", e)),
    }
}

async fn search(
    service: web::Data<Arc<RankingService>>,
    req: web::Json<SearchRequest>,
) -> ActixResult<HttpResponse> {
    let service = service.get_ref().clone();
    match web::block(move || service.search(req.into_inner())).await {
        Ok(Ok(resp)) => Ok(HttpResponse::Ok().json(resp)),
        Ok(Err(e)) => Ok(internal_error("semantic search", e)),
        Err(e) => Ok(internal_error("semantic search", e)),
    }
}

async fn similar(
    service: web::Data<Arc<RankingService>>,
    req: web::Json<SimilarRequest>,
) -> ActixResult<HttpResponse> {
    let service = service.get_ref().clone();
    match web::block(move || service.similar(req.into_inner())).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(resp)),
        Err(e) => Ok(internal_error("finding similar products", e)),
    }
}

async fn preload_model(service: web::Data<Arc<RankingService>>) -> ActixResult<HttpResponse> {
    let service = service.get_ref().clone();
    match web::block(move || service.preload()).await {
        Ok(Ok(resp)) => Ok(HttpResponse::Ok().json(resp)),
        Ok(Err(e)) => Ok(internal_error("preloading model", e)),
        Err(e) => Ok(internal_error("preloading model", e)),
    }
}
