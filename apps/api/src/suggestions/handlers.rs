use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::ats::analyzer::FileMetadata;
use crate::errors::AppError;
use crate::models::profile::StructuredProfile;
use crate::state::AppState;
use crate::suggestions::generator::Suggestion;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub resume: StructuredProfile,
    #[serde(default)]
    pub file: Option<FileMetadata>,
}

/// POST /api/v1/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<Vec<Suggestion>>, AppError> {
    Ok(Json(state.suggester.generate(&req.resume, req.file.as_ref())))
}
