mod ats;
mod config;
mod embedding;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod state;
mod suggestions;
mod vocab;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats::analyzer::AtsAnalyzer;
use crate::config::Config;
use crate::embedding::{EmbeddingProvider, HttpEmbeddingClient};
use crate::matching::scoring::MatchEngine;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestions::generator::SuggestionEngine;
use crate::vocab::Vocabulary;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every variable has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumatch API v{}", env!("CARGO_PKG_VERSION"));

    // Term lists shared by extraction, scoring and analysis
    let vocab = Arc::new(Vocabulary::default());

    // Scoring engine (rejects a bad weight configuration up front)
    let engine = Arc::new(MatchEngine::new(config.weights, Arc::clone(&vocab))?);
    info!("Match engine initialized (weights: {:?})", engine.weights());

    let ats = Arc::new(AtsAnalyzer::new(Arc::clone(&vocab))?);
    info!("ATS analyzer initialized");

    let suggester = Arc::new(SuggestionEngine::new(Arc::clone(&vocab)));

    // Optional embedding backend; without it scoring runs lexical-only
    let embedder: Option<Arc<dyn EmbeddingProvider>> = match &config.embedding_api_url {
        Some(url) => {
            info!("Embedding client initialized ({url})");
            Some(Arc::new(HttpEmbeddingClient::new(
                url.clone(),
                config.embedding_api_key.clone(),
            )))
        }
        None => {
            info!("EMBEDDING_API_URL not set; semantic scoring disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        vocab,
        engine,
        ats,
        suggester,
        embedder,
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
