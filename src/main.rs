use clap::Parser;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use cartrank_api::{HashingEmbedder, ModelHandle, RankingService, RestApi, DEFAULT_EMBEDDING_DIM};

/// Explainable multi-factor ranking service
#[derive(Parser, Debug)]
#[command(name = "cartrank")]
#[command(about = "Explainable semantic ranking for product catalogs", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, env = "CARTRANK_HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, env = "CARTRANK_HTTP_PORT", default_value_t = 8000)]
    http_port: u16,

    /// Log level
    #[arg(long, env = "CARTRANK_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Dimension of generated embeddings
    #[arg(long, env = "CARTRANK_EMBEDDING_DIM", default_value_t = DEFAULT_EMBEDDING_DIM)]
    embedding_dim: usize,

    /// Load the embedding model at start-up instead of on first use
    #[arg(long, env = "CARTRANK_PRELOAD")]
    preload: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cartrank v{}", env!("CARGO_PKG_VERSION"));
    info!("Embedding dimension: {}", args.embedding_dim);

    // Reject a bad dimension before binding
    HashingEmbedder::new(args.embedding_dim)?;
    let service = Arc::new(RankingService::new(ModelHandle::hashing(args.embedding_dim)));

    if args.preload {
        let preload = service.preload()?;
        info!("Preloaded model {}", preload.model_name);
    }

    info!("HTTP API: http://{}:{}/", args.host, args.http_port);
    RestApi::start(service, args.host, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}
