mod audit;
mod backlinks;
mod config;
mod content;
mod db;
mod errors;
mod insights;
mod llm;
mod models;
mod routes;
mod sites;
mod state;
mod store;
mod tracking;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::audit::fetcher::PageFetcher;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tracking::rank_source::UnconfiguredRankSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Rankpilot API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm::MODEL);

    // Shared page fetcher for audits and URL-based content analysis
    let fetcher = PageFetcher::new();

    // Rank source stays unconfigured until a SERP API is wired in
    let rank_source = Arc::new(UnconfiguredRankSource);

    // Build app state
    let state = AppState {
        db,
        llm,
        fetcher,
        rank_source,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
