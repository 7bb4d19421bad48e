mod config;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::extraction::DocumentTextExtractor;
use crate::matching::resources::language_resources;
use crate::matching::MatchPipeline;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume screener v{}", env!("CARGO_PKG_VERSION"));

    // Load language resources up front so the first request doesn't pay for it
    let resources = language_resources();
    info!("Language resources loaded ({} stopwords)", resources.stopword_count());

    // Validate pipeline settings once; bad settings abort startup
    let pipeline = Arc::new(MatchPipeline::new(config.pipeline_settings())?);
    let settings = pipeline.settings();
    info!(
        "Match pipeline ready (mode: {}, top_n: {}, fuzzy_threshold: {})",
        settings.scoring_mode, settings.top_n, settings.fuzzy_threshold
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        pipeline,
        extractor: Arc::new(DocumentTextExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
