//! Date heuristics shared by the per-section extractors and the readability
//! analyzer. Parsing extracts 4-digit year tokens only; month granularity is
//! intentionally dropped.

use regex::Regex;
use std::sync::LazyLock;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid regex"));

static PRESENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:present|current|now|ongoing)\b").expect("valid regex"));

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b((?:19|20)\d{2})\s*(?:-|–|—|to|until|through)\s*(?:[a-z]+\.?\s+)?((?:19|20)\d{2}|present|current|now|ongoing)\b",
    )
    .expect("valid regex")
});

static MONTH_FULL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+(?:19|20)\d{2}\b",
    )
    .expect("valid regex")
});

// "may" is deliberately absent: a three-letter May is indistinguishable from
// the full month name and would double-count the format.
static MONTH_ABBR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\.?\s+(?:19|20)\d{2}\b")
        .expect("valid regex")
});

static NUMERIC_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:0?[1-9]|1[0-2])/(?:19|20)\d{2}\b").expect("valid regex"));

/// Years recovered from a date-range phrase. `end_year = None` with
/// `current = true` means the range is open ("2019 - Present").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub current: bool,
}

/// First date range found in `text`, if any. A lone year followed by a
/// present/current marker also counts as an open range.
pub fn parse_range(text: &str) -> Option<DateRange> {
    if let Some(caps) = RANGE_RE.captures(text) {
        let start_year = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let end_token = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        if PRESENT_RE.is_match(end_token) {
            return Some(DateRange {
                start_year,
                end_year: None,
                current: true,
            });
        }
        return Some(DateRange {
            start_year,
            end_year: end_token.parse().ok(),
            current: false,
        });
    }

    let year = first_year(text);
    if year.is_some() && PRESENT_RE.is_match(text) {
        return Some(DateRange {
            start_year: year,
            end_year: None,
            current: true,
        });
    }
    None
}

pub fn first_year(text: &str) -> Option<i32> {
    YEAR_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

pub fn is_present_token(text: &str) -> bool {
    PRESENT_RE.is_match(text)
}

/// `text` with its first date range removed, along with any wrapping
/// parentheses. Used to clean company/title lines that carry inline dates.
pub fn without_range(text: &str) -> String {
    match RANGE_RE.find(text) {
        Some(m) => {
            let mut cleaned = String::with_capacity(text.len());
            cleaned.push_str(&text[..m.start()]);
            cleaned.push_str(&text[m.end()..]);
            cleaned
                .trim_matches(|c: char| c.is_whitespace() || "()-–—,".contains(c))
                .to_string()
        }
        None => text.trim().to_string(),
    }
}

/// Counts the distinct date formats present in `text`: full month name,
/// abbreviated month, numeric MM/YYYY, and bare year. A year that is part of
/// a month or numeric date does not also count as a bare year.
pub fn distinct_date_formats(text: &str) -> usize {
    let mut consumed: Vec<(usize, usize)> = Vec::new();
    let mut formats = 0usize;

    for re in [&*MONTH_FULL_RE, &*MONTH_ABBR_RE, &*NUMERIC_DATE_RE] {
        let mut found = false;
        for m in re.find_iter(text) {
            consumed.push((m.start(), m.end()));
            found = true;
        }
        if found {
            formats += 1;
        }
    }

    let bare_year = YEAR_RE.find_iter(text).any(|m| {
        !consumed
            .iter()
            .any(|&(a, b)| m.start() >= a && m.end() <= b)
    });
    if bare_year {
        formats += 1;
    }

    formats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_year_to_year() {
        let range = parse_range("Engineer (2019 - 2022)").unwrap();
        assert_eq!(range.start_year, Some(2019));
        assert_eq!(range.end_year, Some(2022));
        assert!(!range.current);
    }

    #[test]
    fn test_parse_range_open_ended_maps_to_current() {
        let range = parse_range("Jun 2019 - Present").unwrap();
        assert_eq!(range.start_year, Some(2019));
        assert_eq!(range.end_year, None);
        assert!(range.current);
    }

    #[test]
    fn test_parse_range_with_month_on_both_sides() {
        let range = parse_range("Jan 2018 to Dec 2020").unwrap();
        assert_eq!(range.start_year, Some(2018));
        assert_eq!(range.end_year, Some(2020));
    }

    #[test]
    fn test_parse_range_lone_year_with_current_marker() {
        let range = parse_range("2021, current").unwrap();
        assert_eq!(range.start_year, Some(2021));
        assert!(range.current);
    }

    #[test]
    fn test_parse_range_none_without_years() {
        assert!(parse_range("Senior Engineer at Initech").is_none());
    }

    #[test]
    fn test_first_year_rejects_non_year_numbers() {
        assert_eq!(first_year("Built 3000 widgets in 2019"), Some(2019));
        assert_eq!(first_year("Built 3000 widgets"), None);
    }

    #[test]
    fn test_present_token_detection() {
        assert!(is_present_token("2020 - present"));
        assert!(is_present_token("Current position"));
        assert!(!is_present_token("presentation skills"));
    }

    #[test]
    fn test_without_range_strips_parenthesized_dates() {
        assert_eq!(without_range("Initech (2019 - 2022)"), "Initech");
        assert_eq!(without_range("Globex Corp"), "Globex Corp");
    }

    // ── distinct_date_formats ───────────────────────────────────────────────

    #[test]
    fn test_single_format_counts_once() {
        assert_eq!(distinct_date_formats("Jan 2020 - Mar 2021, Apr 2021 - Jun 2022"), 1);
        assert_eq!(distinct_date_formats("2019 - 2021 and 2021 - 2023"), 1);
    }

    #[test]
    fn test_mixed_formats_counted_separately() {
        assert_eq!(distinct_date_formats("January 2020 until 03/2021"), 2);
        assert_eq!(distinct_date_formats("Jan 2020, January 2021, 05/2022, 2023"), 4);
    }

    #[test]
    fn test_year_inside_month_date_not_double_counted() {
        // "Jan 2020" contains the year 2020, but no bare year exists.
        assert_eq!(distinct_date_formats("Jan 2020 - Feb 2021"), 1);
    }

    #[test]
    fn test_no_dates_yields_zero() {
        assert_eq!(distinct_date_formats("no dates here"), 0);
    }
}
