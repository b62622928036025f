pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats;
use crate::extraction;
use crate::matching;
use crate::state::AppState;
use crate::suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Parsing API
        .route(
            "/api/v1/profiles/parse",
            post(extraction::handlers::handle_parse),
        )
        // Matching API
        .route(
            "/api/v1/match/score",
            post(matching::handlers::handle_score),
        )
        .route("/api/v1/match/rank", post(matching::handlers::handle_rank))
        // ATS API
        .route("/api/v1/ats/analyze", post(ats::handlers::handle_analyze))
        // Suggestions API
        .route(
            "/api/v1/suggestions",
            post(suggestions::handlers::handle_suggestions),
        )
        .with_state(state)
}
