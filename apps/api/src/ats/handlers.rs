use axum::{extract::State, Json};
use serde::Deserialize;

use super::analyzer::{AtsReport, FileMetadata};
use crate::errors::AppError;
use crate::models::profile::StructuredProfile;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AtsRequest {
    pub resume: StructuredProfile,
    #[serde(default)]
    pub file: Option<FileMetadata>,
}

/// POST /api/v1/ats/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AtsRequest>,
) -> Result<Json<AtsReport>, AppError> {
    Ok(Json(state.ats.analyze(&req.resume, req.file.as_ref())))
}
