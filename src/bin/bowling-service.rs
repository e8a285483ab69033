use std::sync::Arc;

use bowling_service::{http, InMemoryGameStore, ScoringEngine, ServiceConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = ServiceConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let engine = Arc::new(ScoringEngine::new(InMemoryGameStore::new()));
    http::serve(engine, &config.bind_addr()).await
}
