use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction;
use crate::extraction::keywords::{self, SkillMention};
use crate::models::profile::StructuredProfile;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ParseRequest {
    pub raw_text: String,
}

#[derive(Serialize)]
pub struct ParseResponse {
    pub profile: StructuredProfile,
    pub keywords: Vec<String>,
    pub skill_mentions: Vec<SkillMention>,
}

/// POST /api/v1/profiles/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if req.raw_text.trim().is_empty() {
        return Err(AppError::Validation(
            "raw_text must not be empty".to_string(),
        ));
    }

    let profile = extraction::extract_structured_content(&req.raw_text, &state.vocab);
    let keywords = keywords::extract_keywords(&profile, &state.vocab);
    let skill_mentions = keywords::extract_skills(&profile, &state.vocab);

    Ok(Json(ParseResponse {
        profile,
        keywords,
        skill_mentions,
    }))
}
