//! Keyword coverage scoring.
//!
//! The job side defines the target set: tokens from the description and
//! requirements. Coverage is bidirectional containment so "router" in a
//! résumé still counts toward "routers" in the posting.

use crate::extraction::keywords::tokenize;
use crate::models::job::JobProfile;
use crate::vocab::Vocabulary;

#[derive(Debug, Clone)]
pub struct KeywordScore {
    pub score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Deduplicated keyword tokens from the job's description and requirements.
pub fn job_keywords(job: &JobProfile, vocab: &Vocabulary) -> Vec<String> {
    let text = format!("{} {}", job.description, job.requirements.join(" "));
    tokenize(&text, vocab)
}

/// Fraction of job keywords covered by résumé keywords, as 0-100.
/// A job with no extractable keywords scores 0.
pub fn score_keywords(resume_keywords: &[String], job_keywords: &[String]) -> KeywordScore {
    if job_keywords.is_empty() {
        return KeywordScore {
            score: 0,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for keyword in job_keywords {
        let covered = resume_keywords
            .iter()
            .any(|r| r.contains(keyword.as_str()) || keyword.contains(r.as_str()));
        if covered {
            matched.push(keyword.clone());
        } else {
            missing.push(keyword.clone());
        }
    }

    let score = ((matched.len() as f64 / job_keywords.len() as f64) * 100.0).round() as u32;
    KeywordScore {
        score,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_job_keywords_tokenize_description_and_requirements() {
        let vocab = Vocabulary::default();
        let job = JobProfile {
            description: "Build streaming pipelines.".to_string(),
            requirements: vec!["Kafka experience".to_string()],
            ..Default::default()
        };
        let keywords = job_keywords(&job, &vocab);
        assert_eq!(keywords, vec!["build", "streaming", "pipelines", "kafka", "experience"]);
    }

    #[test]
    fn test_coverage_fraction_rounds() {
        let job = owned(&["kafka", "streams", "latency"]);
        let resume = owned(&["kafka", "latency"]);
        let result = score_keywords(&resume, &job);
        assert_eq!(result.score, 67);
        assert_eq!(result.matched, vec!["kafka", "latency"]);
        assert_eq!(result.missing, vec!["streams"]);
    }

    #[test]
    fn test_containment_counts_plural_variants() {
        let result = score_keywords(&owned(&["router"]), &owned(&["routers"]));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_empty_job_keywords_scores_zero() {
        let result = score_keywords(&owned(&["anything"]), &[]);
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
    }
}
