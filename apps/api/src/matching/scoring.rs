//! Match orchestration: four sub-scores combined into one weighted result.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::extraction::keywords::extract_keywords;
use crate::models::job::JobProfile;
use crate::models::profile::StructuredProfile;
use crate::vocab::Vocabulary;

use super::experience;
use super::keywords as keyword_scoring;
use super::semantic;
use super::skills as skill_scoring;
use super::weights::MatchWeights;

const SKILL_RECOMMENDATION_THRESHOLD: u32 = 70;
const EXPERIENCE_RECOMMENDATION_THRESHOLD: u32 = 60;
const KEYWORD_RECOMMENDATION_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubScores {
    pub semantic: u32,
    pub skills: u32,
    pub experience: u32,
    pub keywords: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceGap {
    pub resume_experience: f64,
    pub required_experience: f64,
    /// `required - resume`, clamped at zero.
    pub gap: f64,
    pub meets_requirement: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: u32,
    pub breakdown: SubScores,
    pub weights: MatchWeights,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub experience_gap: ExperienceGap,
    /// True when at least one side had no embedding at all.
    pub embedding_missing: bool,
    pub recommendations: Vec<String>,
}

/// Stateless scorer. Construction fails on invalid weights so a bad
/// configuration stops the process at startup instead of skewing scores.
pub struct MatchEngine {
    weights: MatchWeights,
    vocab: Arc<Vocabulary>,
}

impl MatchEngine {
    pub fn new(weights: MatchWeights, vocab: Arc<Vocabulary>) -> anyhow::Result<Self> {
        weights.validate()?;
        Ok(MatchEngine { weights, vocab })
    }

    pub fn weights(&self) -> MatchWeights {
        self.weights
    }

    pub fn score(&self, resume: &StructuredProfile, job: &JobProfile) -> MatchResult {
        self.score_with_year(resume, job, Utc::now().year())
    }

    /// Scoring with an explicit "this year" so year arithmetic is testable.
    pub fn score_with_year(
        &self,
        resume: &StructuredProfile,
        job: &JobProfile,
        current_year: i32,
    ) -> MatchResult {
        let (semantic_score, embedding_missing) =
            semantic::semantic_score(resume.embedding.as_deref(), job.embedding.as_deref());

        let resume_pool: Vec<String> = resume.skills.all().map(str::to_string).collect();
        let skill = skill_scoring::score_skills(&resume_pool, &job.skills);

        let exp = experience::score_experience(resume, job, current_year);

        let resume_keywords = extract_keywords(resume, &self.vocab);
        let job_keywords = keyword_scoring::job_keywords(job, &self.vocab);
        let keyword = keyword_scoring::score_keywords(&resume_keywords, &job_keywords);

        let breakdown = SubScores {
            semantic: semantic_score,
            skills: skill.score,
            experience: exp.score,
            keywords: keyword.score,
        };
        let overall_score = combine(&self.weights, &breakdown);
        let recommendations =
            build_recommendations(&breakdown, &skill.missing, &keyword.missing, exp.gap_years);

        MatchResult {
            overall_score,
            breakdown,
            weights: self.weights,
            matched_skills: skill.matched,
            missing_skills: skill.missing,
            matched_keywords: keyword.matched,
            missing_keywords: keyword.missing,
            experience_gap: ExperienceGap {
                resume_experience: exp.actual_years,
                required_experience: exp.required_years,
                gap: exp.gap_years,
                meets_requirement: exp.meets_requirement,
            },
            embedding_missing,
            recommendations,
        }
    }
}

fn combine(weights: &MatchWeights, sub: &SubScores) -> u32 {
    let total = weights.semantic * f64::from(sub.semantic)
        + weights.skills * f64::from(sub.skills)
        + weights.experience * f64::from(sub.experience)
        + weights.keywords * f64::from(sub.keywords);
    total.round().clamp(0.0, 100.0) as u32
}

fn build_recommendations(
    sub: &SubScores,
    missing_skills: &[String],
    missing_keywords: &[String],
    gap_years: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    if sub.skills < SKILL_RECOMMENDATION_THRESHOLD {
        if missing_skills.is_empty() {
            recommendations
                .push("Strengthen the skills section with the role's core tools".to_string());
        } else {
            let list = missing_skills
                .iter()
                .take(5)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            recommendations.push(format!("Add or highlight these skills: {list}"));
        }
    }
    if sub.experience < EXPERIENCE_RECOMMENDATION_THRESHOLD && gap_years > 0.0 {
        recommendations.push(format!(
            "The role asks for about {gap_years:.0} more years of relevant experience; surface older or adjacent work"
        ));
    }
    if sub.keywords < KEYWORD_RECOMMENDATION_THRESHOLD && !missing_keywords.is_empty() {
        let list = missing_keywords
            .iter()
            .take(5)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        recommendations.push(format!("Work the job's own wording into the resume: {list}"));
    }
    recommendations
}
