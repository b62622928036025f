//! Personal info extraction: whole-document regex search, independent of
//! section boundaries. Every field is first-match-wins.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::sections;
use crate::models::profile::PersonalInfo;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid regex")
});

// US-style numbers only; broader phone localization is out of scope.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,2}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]\d{4}\b").expect("valid regex")
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s,;)>\]]+").expect("valid regex"));

static PROFILE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:www\.)?(?:linkedin\.com/in/|github\.com/)[A-Za-z0-9_./-]+")
        .expect("valid regex")
});

// Ordered address patterns: street line first, city/state/zip as fallback.
static STREET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b\d{1,5}\s+(?:[A-Z][a-zA-Z.]*\s+){1,4}(?:Street|St\.?|Avenue|Ave\.?|Road|Rd\.?|Drive|Dr\.?|Lane|Ln\.?|Boulevard|Blvd\.?|Way|Court|Ct\.?)\b",
    )
    .expect("valid regex")
});

static CITY_STATE_ZIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*,\s*[A-Z]{2}\s+\d{5}(?:-\d{4})?\b")
        .expect("valid regex")
});

const NAME_SCAN_LINES: usize = 5;

pub fn extract_personal_info(raw: &str) -> PersonalInfo {
    PersonalInfo {
        name: extract_name(raw),
        email: EMAIL_RE.find(raw).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(raw).map(|m| m.as_str().trim().to_string()),
        address: extract_address(raw),
        links: extract_links(raw),
        summary: None, // filled from the summary section by the assembler
    }
}

/// The candidate name is the first of the top lines that reads like a person:
/// 2–4 capitalized words, no digits, no contact syntax, and not a section
/// heading.
fn extract_name(raw: &str) -> Option<String> {
    raw.lines()
        .filter(|l| !l.trim().is_empty())
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| looks_like_name(line))
        .map(|line| line.to_string())
}

fn looks_like_name(line: &str) -> bool {
    if line.len() >= 60
        || line.contains('@')
        || line.contains("http")
        || line.chars().any(|c| c.is_ascii_digit())
        || sections::is_recognized_heading(line)
    {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&words.len())
        && words
            .iter()
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

fn extract_address(raw: &str) -> Option<String> {
    if let Some(m) = STREET_RE.find(raw) {
        return Some(line_containing(raw, m.start()).trim().to_string());
    }
    CITY_STATE_ZIP_RE
        .find(raw)
        .map(|m| m.as_str().to_string())
}

/// First URL in `text`, trimmed of trailing punctuation.
pub(crate) fn first_url(text: &str) -> Option<String> {
    URL_RE
        .find(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',']).to_string())
}

fn extract_links(raw: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for m in URL_RE.find_iter(raw) {
        let link = m.as_str().trim_end_matches(['.', ',']).to_string();
        if !links.contains(&link) {
            links.push(link);
        }
    }
    for m in PROFILE_LINK_RE.find_iter(raw) {
        let link = m.as_str().trim_end_matches(['.', ',']).to_string();
        // Skip bare profile paths already captured as part of a full URL.
        if !links.iter().any(|l| l.contains(&link)) {
            links.push(link);
        }
    }
    links
}

fn line_containing(raw: &str, idx: usize) -> &str {
    let start = raw[..idx].rfind('\n').map(|p| p + 1).unwrap_or(0);
    let end = raw[idx..].find('\n').map(|p| idx + p).unwrap_or(raw.len());
    &raw[start..end]
}
