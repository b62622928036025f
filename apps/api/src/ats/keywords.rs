//! Keyword richness: screening-vocabulary coverage, quantified outcomes,
//! and strong bullet openers. Purely additive, capped at 100.

use super::analyzer::FactorScore;
use super::heuristics;
use crate::extraction::keywords::extract_keywords;
use crate::models::profile::StructuredProfile;
use crate::vocab::{term_in_text, Vocabulary};

const IMPORTANT_HIT_POINTS: usize = 2;
const QUANTIFIABLE_POINTS: usize = 5;
const QUANTIFIABLE_CAP: usize = 20;
const ACTION_BULLET_POINTS: usize = 3;
const ACTION_BULLET_CAP: usize = 15;

pub fn analyze(resume: &StructuredProfile, vocab: &Vocabulary) -> FactorScore {
    let text = &resume.raw_text;
    let text_lower = text.to_lowercase();
    let mut score = 0usize;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    let hits = vocab
        .important_keywords
        .iter()
        .filter(|k| term_in_text(&text_lower, k))
        .count();
    score += IMPORTANT_HIT_POINTS * hits;
    if hits < 5 {
        issues.push("Few of the keywords ATS screeners weight are present".to_string());
        suggestions
            .push("Describe work with concrete delivery verbs like led, built, shipped".to_string());
    }

    let quantifiable = heuristics::count_quantifiable(text);
    score += (QUANTIFIABLE_POINTS * quantifiable).min(QUANTIFIABLE_CAP);
    if quantifiable == 0 {
        issues.push("No quantified achievements found".to_string());
        suggestions.push("Add numbers: percentages, dollar amounts, team sizes".to_string());
    }

    let bullets = heuristics::bullet_stats(text, vocab);
    score += (ACTION_BULLET_POINTS * bullets.action_led).min(ACTION_BULLET_CAP);
    if bullets.total > 0 && bullets.action_led == 0 {
        suggestions.push("Open bullet points with a strong action verb".to_string());
    }

    let distinct_keywords = extract_keywords(resume, vocab).len();
    if distinct_keywords > 10 {
        score += 10;
    } else if distinct_keywords > 5 {
        score += 5;
    }

    FactorScore {
        score: score.min(100) as u32,
        issues,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume_with_text(text: &str) -> StructuredProfile {
        StructuredProfile {
            raw_text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_important_keywords_add_two_each() {
        let factor = analyze(
            &resume_with_text("Led migration. Improved performance."),
            &Vocabulary::default(),
        );
        // led, migration, improved, performance: 4 hits, 4 distinct tokens
        assert_eq!(factor.score, 8);
    }

    #[test]
    fn test_quantifiable_bonus_caps_at_twenty() {
        let factor = analyze(
            &resume_with_text("9% 12% $4k 2x 33%"),
            &Vocabulary::default(),
        );
        assert_eq!(factor.score, 20);
        assert!(factor.issues.iter().any(|i| i.contains("keywords")));
    }

    #[test]
    fn test_action_bullets_cap_at_fifteen() {
        let text = "- Built alpha\n".repeat(6);
        let factor = analyze(&resume_with_text(&text), &Vocabulary::default());
        assert_eq!(factor.score, 15);
    }

    #[test]
    fn test_keyword_diversity_tiers() {
        let six = resume_with_text("alpha beta gamma delta epsilon zeta");
        assert_eq!(analyze(&six, &Vocabulary::default()).score, 5);
        let eleven = resume_with_text(
            "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda",
        );
        assert_eq!(analyze(&eleven, &Vocabulary::default()).score, 10);
    }

    #[test]
    fn test_empty_resume_scores_zero_with_suggestions() {
        let factor = analyze(&resume_with_text(""), &Vocabulary::default());
        assert_eq!(factor.score, 0);
        assert!(!factor.suggestions.is_empty());
    }
}
