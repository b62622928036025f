//! Skill, language, and certification list extraction.
//!
//! Skills sections are list-shaped rather than prose-shaped: comma runs,
//! bullet items, or "Label: a, b, c" lines. Items are split out, cleaned,
//! and sorted into technical and soft buckets. Anything that is not
//! recognizably soft counts as technical, which keeps unknown tools and
//! frameworks matchable instead of silently dropping them.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::dates;
use crate::extraction::sections::strip_bullet;
use crate::models::profile::{Certification, LanguageEntry};
use crate::vocab::Vocabulary;

const MAX_ITEM_LEN: usize = 40;
const MAX_ITEM_WORDS: usize = 4;

static LANGUAGE_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<lang>[a-z][a-z ]{1,29}?)\s*(?:[(:\-–]\s*(?P<prof>[a-z0-9][a-z0-9 ]{0,29}?)\s*\)?)?$")
        .expect("valid regex")
});

/// Splits the skills section body into (technical, soft) skill lists.
pub fn parse_skills(body: &str, vocab: &Vocabulary) -> (Vec<String>, Vec<String>) {
    let mut technical: Vec<String> = Vec::new();
    let mut soft: Vec<String> = Vec::new();

    for item in list_items(body) {
        let lower = item.to_lowercase();
        let bucket = if vocab.soft_skills.iter().any(|s| lower.contains(s.as_str())) {
            &mut soft
        } else {
            &mut technical
        };
        if !bucket.iter().any(|s| s.eq_ignore_ascii_case(&item)) {
            bucket.push(item);
        }
    }
    (technical, soft)
}

/// Splits the languages section body into language entries with optional
/// proficiency, e.g. "English (Fluent)" or "Spanish - Professional".
pub fn parse_languages(body: &str) -> Vec<LanguageEntry> {
    let mut entries: Vec<LanguageEntry> = Vec::new();
    for item in list_items(body) {
        let Some(caps) = LANGUAGE_ITEM_RE.captures(&item) else {
            continue;
        };
        let Some(language) = caps.name("lang").map(|m| m.as_str().trim().to_string()) else {
            continue;
        };
        if entries.iter().any(|e| e.language.eq_ignore_ascii_case(&language)) {
            continue;
        }
        entries.push(LanguageEntry {
            language,
            proficiency: caps.name("prof").map(|m| m.as_str().trim().to_string()),
        });
    }
    entries
}

/// One certification per line. A " - " separator or a trailing comma
/// segment names the issuer; trailing year segments are dropped.
pub fn parse_certifications(body: &str) -> Vec<Certification> {
    let mut certs: Vec<Certification> = Vec::new();
    for raw in body.lines() {
        let line = strip_bullet(raw);
        if line.is_empty() {
            continue;
        }

        let mut segments: Vec<&str> = line.split(',').map(str::trim).collect();
        if let Some(last) = segments.last() {
            if last.len() <= 12 && dates::first_year(last).is_some() {
                segments.pop();
            }
        }
        if segments.is_empty() {
            continue;
        }

        let (name, issuer) = if let Some((left, right)) = segments[0].split_once(" - ") {
            (left.trim().to_string(), Some(right.trim().to_string()))
        } else if segments.len() >= 2 && !segments[segments.len() - 1].chars().any(|c| c.is_ascii_digit()) {
            (
                segments[..segments.len() - 1].join(", "),
                Some(segments[segments.len() - 1].to_string()),
            )
        } else {
            (segments.join(", "), None)
        };

        if name.is_empty() || certs.iter().any(|c| c.name.eq_ignore_ascii_case(&name)) {
            continue;
        }
        certs.push(Certification { name, issuer });
    }
    certs
}

/// Individual list items from a list-shaped section body: lines are split
/// on bullets and common separators, "Label:" prefixes are dropped, and
/// sentence-length fragments are filtered out.
fn list_items(body: &str) -> Vec<String> {
    let mut items = Vec::new();
    for raw in body.lines() {
        let mut line = strip_bullet(raw);
        if line.is_empty() {
            continue;
        }
        if let Some((label, rest)) = line.split_once(':') {
            if label.len() <= 30 && !label.contains("http") {
                line = rest.trim_start();
            }
        }
        for piece in line.split([',', ';', '|', '•', '·']) {
            let item = piece.trim().trim_end_matches('.').trim();
            if item.is_empty()
                || item.len() > MAX_ITEM_LEN
                || item.split_whitespace().count() > MAX_ITEM_WORDS
            {
                continue;
            }
            items.push(item.to_string());
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_comma_lists_split_into_buckets() {
        let vocab = Vocabulary::default();
        let body = "Programming: Python, Rust, TypeScript\n\
            Tools: Docker; Kubernetes\n\
            Soft skills: Communication, Team Leadership";
        let (technical, soft) = parse_skills(body, &vocab);
        assert_eq!(technical, vec!["Python", "Rust", "TypeScript", "Docker", "Kubernetes"]);
        assert_eq!(soft, vec!["Communication", "Team Leadership"]);
    }

    #[test]
    fn test_bulleted_items_and_dedup() {
        let vocab = Vocabulary::default();
        let body = "- Python\n- python\n- AWS";
        let (technical, soft) = parse_skills(body, &vocab);
        assert_eq!(technical, vec!["Python", "AWS"]);
        assert!(soft.is_empty());
    }

    #[test]
    fn test_sentence_fragments_are_dropped() {
        let vocab = Vocabulary::default();
        let body = "I have worked with many different databases over the years\nPostgreSQL";
        let (technical, _) = parse_skills(body, &vocab);
        assert_eq!(technical, vec!["PostgreSQL"]);
    }

    #[test]
    fn test_languages_with_proficiency_markers() {
        let entries = parse_languages("English (Fluent)\nSpanish - Professional\nFrench");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].language, "English");
        assert_eq!(entries[0].proficiency.as_deref(), Some("Fluent"));
        assert_eq!(entries[1].language, "Spanish");
        assert_eq!(entries[1].proficiency.as_deref(), Some("Professional"));
        assert_eq!(entries[2].language, "French");
        assert!(entries[2].proficiency.is_none());
    }

    #[test]
    fn test_certifications_with_issuer_and_year() {
        let certs = parse_certifications(
            "AWS Certified Solutions Architect - Amazon\n\
             - CKA, Cloud Native Computing Foundation, 2022\n\
             Scrum Master Certification",
        );
        assert_eq!(certs.len(), 3);
        assert_eq!(certs[0].name, "AWS Certified Solutions Architect");
        assert_eq!(certs[0].issuer.as_deref(), Some("Amazon"));
        assert_eq!(certs[1].name, "CKA");
        assert_eq!(certs[1].issuer.as_deref(), Some("Cloud Native Computing Foundation"));
        assert_eq!(certs[2].name, "Scrum Master Certification");
        assert!(certs[2].issuer.is_none());
    }
}
