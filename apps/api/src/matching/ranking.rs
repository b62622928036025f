//! Batch scoring: one fixed profile against many candidates, concurrently.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;
use uuid::Uuid;

use crate::models::job::JobProfile;
use crate::models::profile::StructuredProfile;

use super::scoring::{MatchEngine, MatchResult};

pub const DEFAULT_MIN_SCORE: u32 = 50;
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RankOptions {
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_min_score() -> u32 {
    DEFAULT_MIN_SCORE
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            min_score: DEFAULT_MIN_SCORE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Aggregates over every candidate that cleared the threshold, computed
/// before the list is cut down to `limit`.
#[derive(Debug, Clone, Serialize)]
pub struct RankSummary {
    pub total_considered: usize,
    pub above_threshold: usize,
    pub average_score: f64,
    pub top_score: u32,
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankOutcome {
    pub candidates: Vec<RankedCandidate>,
    pub summary: RankSummary,
}

/// Rank many resumes against one job, highest overall score first.
pub async fn rank_resumes(
    engine: Arc<MatchEngine>,
    job: Arc<JobProfile>,
    resumes: Vec<(Uuid, StructuredProfile)>,
    options: RankOptions,
    concurrency: usize,
) -> RankOutcome {
    let attempted = resumes.len();
    let scored = score_all(resumes, concurrency, move |resume| {
        engine.score(resume, &job)
    })
    .await;
    assemble(scored, attempted, options)
}

/// Rank many jobs against one resume, highest overall score first.
pub async fn rank_jobs(
    engine: Arc<MatchEngine>,
    resume: Arc<StructuredProfile>,
    jobs: Vec<(Uuid, JobProfile)>,
    options: RankOptions,
    concurrency: usize,
) -> RankOutcome {
    let attempted = jobs.len();
    let scored = score_all(jobs, concurrency, move |job| engine.score(&resume, job)).await;
    assemble(scored, attempted, options)
}

/// Scores every item on the blocking pool, at most `concurrency` at a time.
/// A candidate whose scoring task panics is logged and skipped; the rest of
/// the batch still completes.
async fn score_all<T, F>(
    items: Vec<(Uuid, T)>,
    concurrency: usize,
    score: F,
) -> Vec<(Uuid, MatchResult)>
where
    T: Send + 'static,
    F: Fn(&T) -> MatchResult + Send + Sync + Clone + 'static,
{
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();
    for (id, item) in items {
        let semaphore = Arc::clone(&semaphore);
        let score = score.clone();
        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await;
            tokio::task::spawn_blocking(move || (id, score(&item))).await
        });
    }

    let mut scored = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(pair)) => scored.push(pair),
            Ok(Err(err)) => warn!(error = %err, "scoring task failed, skipping candidate"),
            Err(err) => warn!(error = %err, "scoring task join failed, skipping candidate"),
        }
    }
    scored
}

fn assemble(
    scored: Vec<(Uuid, MatchResult)>,
    attempted: usize,
    options: RankOptions,
) -> RankOutcome {
    let mut candidates: Vec<RankedCandidate> = scored
        .into_iter()
        .filter(|(_, result)| result.overall_score >= options.min_score)
        .map(|(id, result)| RankedCandidate { id, result })
        .collect();
    candidates.sort_by(|a, b| {
        b.result
            .overall_score
            .cmp(&a.result.overall_score)
            .then_with(|| a.id.cmp(&b.id))
    });

    let summary = summarize(&candidates, attempted);
    candidates.truncate(options.limit);
    RankOutcome { candidates, summary }
}

fn summarize(candidates: &[RankedCandidate], attempted: usize) -> RankSummary {
    let above_threshold = candidates.len();
    let total: u64 = candidates
        .iter()
        .map(|c| u64::from(c.result.overall_score))
        .sum();
    let average_score = if above_threshold == 0 {
        0.0
    } else {
        total as f64 / above_threshold as f64
    };

    let mut excellent = 0;
    let mut good = 0;
    let mut fair = 0;
    for candidate in candidates {
        match candidate.result.overall_score {
            80.. => excellent += 1,
            60..=79 => good += 1,
            40..=59 => fair += 1,
            _ => {}
        }
    }

    RankSummary {
        total_considered: attempted,
        above_threshold,
        average_score,
        top_score: candidates.first().map_or(0, |c| c.result.overall_score),
        excellent,
        good,
        fair,
    }
}
