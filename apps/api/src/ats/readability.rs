//! Prose-level readability heuristics over the raw text. Starts from a base
//! and applies the band bonuses and wording penalties, clamped to [0, 100].

use super::analyzer::FactorScore;
use super::heuristics;
use crate::extraction::dates::distinct_date_formats;
use crate::models::profile::StructuredProfile;
use crate::vocab::{term_in_text, Vocabulary};

const BASE_SCORE: i32 = 20;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 800;
const WORD_BAND_BONUS: i32 = 20;
const SENTENCE_BAND_BONUS: i32 = 15;
const BULLET_COUNT_BONUS: i32 = 15;
const BULLET_CONSISTENCY_BONUS: i32 = 10;
const DATE_CONSISTENCY_BONUS: i32 = 10;
const WHITESPACE_BAND_BONUS: i32 = 10;
const WORDING_PENALTY_CAP: i32 = 15;

pub fn analyze(resume: &StructuredProfile, vocab: &Vocabulary) -> FactorScore {
    let text = &resume.raw_text;
    let text_lower = text.to_lowercase();
    let mut score = BASE_SCORE;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    let words = heuristics::word_count(text);
    if (MIN_WORDS..=MAX_WORDS).contains(&words) {
        score += WORD_BAND_BONUS;
    } else if words < MIN_WORDS {
        score -= 10;
        issues.push("Resume is too short".to_string());
        suggestions.push("Aim for 200 to 800 words of substantive content".to_string());
    } else {
        score -= 5;
        issues.push("Resume is longer than screeners expect".to_string());
        suggestions.push("Trim to the most relevant two pages".to_string());
    }

    let sentence_lengths: Vec<usize> = text
        .split(['.', '!', '?'])
        .map(|s| s.split_whitespace().count())
        .filter(|&n| n > 0)
        .collect();
    if !sentence_lengths.is_empty() {
        let avg = sentence_lengths.iter().sum::<usize>() as f64 / sentence_lengths.len() as f64;
        if (8.0..=20.0).contains(&avg) {
            score += SENTENCE_BAND_BONUS;
        } else if avg > 20.0 {
            score -= 5;
            issues.push("Sentences run long".to_string());
            suggestions.push("Split long sentences into one thought each".to_string());
        } else {
            score -= 5;
            issues.push("Text reads as fragments".to_string());
        }
    }

    let bullets = heuristics::bullet_stats(text, vocab);
    if bullets.total >= 5 {
        score += BULLET_COUNT_BONUS;
        if bullets.distinct_markers == 1 {
            score += BULLET_CONSISTENCY_BONUS;
        } else {
            issues.push("Mixed bullet characters".to_string());
            suggestions.push("Use one bullet style throughout".to_string());
        }
    }

    if heuristics::count_first_person(text) > 2 {
        score -= 10;
        issues.push("First-person pronouns throughout".to_string());
        suggestions.push("Drop I and my; start lines with the verb".to_string());
    }

    let misspelled: Vec<&str> = vocab
        .misspellings
        .iter()
        .filter(|m| term_in_text(&text_lower, m))
        .map(String::as_str)
        .collect();
    if !misspelled.is_empty() {
        score -= (5 * misspelled.len() as i32).min(WORDING_PENALTY_CAP);
        issues.push(format!("Possible misspellings: {}", misspelled.join(", ")));
        suggestions.push("Run a spell check before submitting".to_string());
    }

    if heuristics::count_passive_voice(text) > 3 {
        score -= 10;
        issues.push("Heavy passive voice".to_string());
        suggestions.push("Prefer active phrasing: what you did, not what was done".to_string());
    }

    let informal: Vec<&str> = vocab
        .informal_words
        .iter()
        .filter(|w| term_in_text(&text_lower, w))
        .map(String::as_str)
        .collect();
    if !informal.is_empty() {
        score -= (5 * informal.len() as i32).min(WORDING_PENALTY_CAP);
        issues.push(format!("Informal wording: {}", informal.join(", ")));
        suggestions.push("Replace casual wording with precise terms".to_string());
    }

    if distinct_date_formats(text) <= 2 {
        score += DATE_CONSISTENCY_BONUS;
    } else {
        issues.push("Inconsistent date formats".to_string());
        suggestions.push("Pick one date format and use it everywhere".to_string());
    }

    let total_chars = text.chars().count();
    if total_chars > 0 {
        let whitespace = text.chars().filter(|c| c.is_whitespace()).count();
        let density = whitespace as f64 / total_chars as f64;
        if (0.12..=0.35).contains(&density) {
            score += WHITESPACE_BAND_BONUS;
        }
    }

    FactorScore {
        score: score.clamp(0, 100) as u32,
        issues,
        suggestions,
    }
}
