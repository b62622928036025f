//! Skill overlap scoring.
//!
//! The score walks the job's skills: an exact normalized match earns full
//! credit, otherwise the first résumé skill within Levenshtein range earns
//! half credit. Matched/missing lists use looser bidirectional containment
//! so "aws" still lines up with "aws lambda" in the report.

use strsim::levenshtein;

pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.7;
pub const FUZZY_MATCH_CREDIT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SkillScore {
    pub score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Normalized Levenshtein similarity: `(max_len - distance) / max_len`
/// measured in characters. Two empty strings are identical.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    max_len.saturating_sub(distance) as f64 / max_len as f64
}

/// Scores résumé skills against job skills. Either side empty scores 0.
pub fn score_skills(resume_skills: &[String], job_skills: &[String]) -> SkillScore {
    let resume = normalize_skills(resume_skills);
    let job = normalize_skills(job_skills);
    if resume.is_empty() || job.is_empty() {
        return SkillScore {
            score: 0,
            matched: Vec::new(),
            missing: job,
        };
    }

    let mut total = 0.0f64;
    for job_skill in &job {
        if resume.iter().any(|r| r == job_skill) {
            total += 1.0;
            continue;
        }
        if resume
            .iter()
            .any(|r| levenshtein_similarity(r, job_skill) > FUZZY_SIMILARITY_THRESHOLD)
        {
            total += FUZZY_MATCH_CREDIT;
        }
    }
    let score = ((total / job.len() as f64) * 100.0).round().min(100.0) as u32;

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for job_skill in &job {
        let covered = resume
            .iter()
            .any(|r| r.contains(job_skill.as_str()) || job_skill.contains(r.as_str()));
        if covered {
            matched.push(job_skill.clone());
        } else {
            missing.push(job_skill.clone());
        }
    }

    SkillScore {
        score,
        matched,
        missing,
    }
}

/// Lowercased, trimmed, deduplicated, in first-seen order.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for skill in skills {
        let normalized = skill.trim().to_lowercase();
        if !normalized.is_empty() && !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}
