use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobProfile;
use crate::models::profile::StructuredProfile;
use crate::state::AppState;

use super::ranking::{self, RankOptions, RankOutcome};
use super::scoring::MatchResult;

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub resume: StructuredProfile,
    pub job: JobProfile,
}

#[derive(Deserialize)]
pub struct IdentifiedResume {
    pub id: Uuid,
    pub resume: StructuredProfile,
}

#[derive(Deserialize)]
pub struct IdentifiedJob {
    pub id: Uuid,
    pub job: JobProfile,
}

/// Either one job against many resumes, or one resume against many jobs.
#[derive(Deserialize)]
pub struct RankRequest {
    pub job: Option<JobProfile>,
    #[serde(default)]
    pub resumes: Vec<IdentifiedResume>,
    pub resume: Option<StructuredProfile>,
    #[serde(default)]
    pub jobs: Vec<IdentifiedJob>,
    #[serde(default)]
    pub options: RankOptions,
}

/// POST /api/v1/match/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let mut resume = req.resume;
    let mut job = req.job;
    fill_missing_embeddings(&state, &mut resume, &mut job).await;
    Ok(Json(state.engine.score(&resume, &job)))
}

/// POST /api/v1/match/rank
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> Result<Json<RankOutcome>, AppError> {
    let engine = Arc::clone(&state.engine);
    let concurrency = state.config.rank_concurrency;
    let outcome = match (req.job, req.resume) {
        (Some(job), None) => {
            let resumes = req.resumes.into_iter().map(|r| (r.id, r.resume)).collect();
            ranking::rank_resumes(engine, Arc::new(job), resumes, req.options, concurrency).await
        }
        (None, Some(resume)) => {
            let jobs = req.jobs.into_iter().map(|j| (j.id, j.job)).collect();
            ranking::rank_jobs(engine, Arc::new(resume), jobs, req.options, concurrency).await
        }
        _ => {
            return Err(AppError::Validation(
                "provide either a job with resumes or a resume with jobs".to_string(),
            ))
        }
    };
    Ok(Json(outcome))
}

/// Fetches any absent embedding when a provider is configured. A provider
/// failure downgrades the request to scoring without semantics instead of
/// failing it.
async fn fill_missing_embeddings(
    state: &AppState,
    resume: &mut StructuredProfile,
    job: &mut JobProfile,
) {
    let Some(provider) = &state.embedder else {
        return;
    };
    if resume.embedding.is_none() && !resume.raw_text.trim().is_empty() {
        match provider.embed(&resume.raw_text).await {
            Ok(vector) => resume.embedding = Some(vector),
            Err(err) => warn!(error = %err, "resume embedding failed, scoring without it"),
        }
    }
    if job.embedding.is_none() {
        let text = format!(
            "{} {} {}",
            job.title,
            job.description,
            job.requirements.join(" ")
        );
        if !text.trim().is_empty() {
            match provider.embed(&text).await {
                Ok(vector) => job.embedding = Some(vector),
                Err(err) => warn!(error = %err, "job embedding failed, scoring without it"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::analyzer::AtsAnalyzer;
    use crate::config::Config;
    use crate::matching::scoring::MatchEngine;
    use crate::matching::weights::MatchWeights;
    use crate::suggestions::generator::SuggestionEngine;
    use crate::vocab::Vocabulary;

    fn make_state() -> AppState {
        let vocab = Arc::new(Vocabulary::default());
        AppState {
            config: Config {
                port: 3001,
                rust_log: "info".to_string(),
                embedding_api_url: None,
                embedding_api_key: None,
                rank_concurrency: 2,
                weights: MatchWeights::default(),
            },
            vocab: Arc::clone(&vocab),
            engine: Arc::new(
                MatchEngine::new(MatchWeights::default(), Arc::clone(&vocab))
                    .expect("valid weights"),
            ),
            ats: Arc::new(AtsAnalyzer::new(Arc::clone(&vocab)).expect("valid analyzer weights")),
            suggester: Arc::new(SuggestionEngine::new(Arc::clone(&vocab))),
            embedder: None,
        }
    }

    fn make_resume(skills: &[&str]) -> StructuredProfile {
        let mut resume = StructuredProfile::default();
        resume.skills.technical = skills.iter().map(|s| s.to_string()).collect();
        resume
    }

    fn make_job(skills: &[&str]) -> JobProfile {
        JobProfile {
            title: "Engineer".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_score_handler_scores_without_embedder() {
        let response = handle_score(
            State(make_state()),
            Json(ScoreRequest {
                resume: make_resume(&["rust"]),
                job: make_job(&["rust"]),
            }),
        )
        .await
        .expect("score succeeds");
        assert_eq!(response.0.breakdown.skills, 100);
        assert!(response.0.embedding_missing);
    }

    #[tokio::test]
    async fn test_rank_handler_orders_resumes_by_score() {
        let request = RankRequest {
            job: Some(make_job(&["rust", "kafka"])),
            resumes: vec![
                IdentifiedResume {
                    id: Uuid::from_u128(1),
                    resume: make_resume(&["rust"]),
                },
                IdentifiedResume {
                    id: Uuid::from_u128(2),
                    resume: make_resume(&["rust", "kafka"]),
                },
            ],
            resume: None,
            jobs: Vec::new(),
            options: RankOptions {
                min_score: 0,
                limit: 10,
            },
        };
        let response = handle_rank(State(make_state()), Json(request))
            .await
            .expect("rank succeeds");
        let outcome = response.0;
        assert_eq!(outcome.candidates.len(), 2);
        assert_eq!(outcome.candidates[0].id, Uuid::from_u128(2));
        assert_eq!(outcome.summary.total_considered, 2);
    }

    #[tokio::test]
    async fn test_rank_handler_rejects_ambiguous_body() {
        let request = RankRequest {
            job: None,
            resumes: Vec::new(),
            resume: None,
            jobs: Vec::new(),
            options: RankOptions::default(),
        };
        let result = handle_rank(State(make_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
