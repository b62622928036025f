//! Text heuristics shared by the ATS factors and the suggestion generator.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::sections::{is_bullet_line, strip_bullet};
use crate::vocab::Vocabulary;

static QUANTIFIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \d+(?:\.\d+)?\s*(?:%|percent)
        | \$\s*\d[\d,]*(?:\.\d+)?\s*(?:k|m|b|million|billion)?\b
        | \b\d+(?:\.\d+)?x\b",
    )
    .expect("valid regex")
});

static FIRST_PERSON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:i|me|my|mine|myself)\b").expect("valid regex"));

static PASSIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:was|were|been|being|is|are)\s+\w+(?:ed|en)\b").expect("valid regex")
});

/// Percentages, dollar amounts, and multipliers: the patterns a quantified
/// achievement shows up as.
pub(crate) fn count_quantifiable(text: &str) -> usize {
    QUANTIFIABLE_RE.find_iter(text).count()
}

pub(crate) fn count_first_person(text: &str) -> usize {
    FIRST_PERSON_RE.find_iter(text).count()
}

/// Rough passive-voice count: a be-verb followed by a participle-shaped word.
pub(crate) fn count_passive_voice(text: &str) -> usize {
    PASSIVE_RE.find_iter(text).count()
}

pub(crate) struct BulletStats {
    pub total: usize,
    pub action_led: usize,
    /// Distinct lead characters across all bullet lines.
    pub distinct_markers: usize,
}

pub(crate) fn bullet_stats(text: &str, vocab: &Vocabulary) -> BulletStats {
    let mut total = 0;
    let mut action_led = 0;
    let mut markers: Vec<char> = Vec::new();
    for line in text.lines() {
        if !is_bullet_line(line) {
            continue;
        }
        total += 1;
        if let Some(marker) = line.trim_start().chars().next() {
            if !markers.contains(&marker) {
                markers.push(marker);
            }
        }
        let opener = strip_bullet(line)
            .split_whitespace()
            .next()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string());
        if opener.is_some_and(|w| vocab.is_action_verb(&w)) {
            action_led += 1;
        }
    }
    BulletStats {
        total,
        action_led,
        distinct_markers: markers.len(),
    }
}

pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
