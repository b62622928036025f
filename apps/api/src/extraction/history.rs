//! Work and education history extraction.
//!
//! Experience entry headers come in a handful of common layouts. They are
//! recovered by an ordered list of named matchers with first-match-wins
//! precedence, so a line that fits more than one layout is always read the
//! same way:
//!
//!   1. `at_form`    - "Senior Engineer at Initech (2019 - Present)"
//!   2. `pipe_form`  - "Senior Engineer | Initech | 2019 - 2022"
//!   3. `comma_form` - "Senior Engineer, Initech, 2019 - 2022"
//!
//! Blocks that match none of these fall back to a stacked layout (title,
//! company, and dates on consecutive lines) or are folded into the previous
//! entry's description.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::dates::{self, DateRange};
use crate::extraction::sections::{is_bullet_line, strip_bullet};
use crate::models::profile::{EducationEntry, ExperienceEntry};
use crate::vocab::Vocabulary;

static AT_FORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<title>[A-Z][^|,@\n]{1,59}?)\s+at\s+(?P<org>[A-Z0-9][^,(|\n]{1,59}?)\s*(?:[(,]\s*(?P<dates>[^)\n]{4,60})\)?\s*)?$",
    )
    .expect("valid regex")
});

static TECH_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:technologies|technology|tech stack|tools|stack|tech)\s*[:\-]\s*(?P<list>.+)$")
        .expect("valid regex")
});

static DEGREE_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor|master|doctorate|associate|ph\.?\s?d|m\.?b\.?a)(?:'s)?(?:\s+(?:of|in)\s+[a-z][a-z&/\- ]*)?",
    )
    .expect("valid regex")
});

// Case-sensitive on purpose: a case-insensitive "ma"/"bs" would light up on
// ordinary words and state abbreviations like "Cambridge, MA".
static DEGREE_ABBR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:B\.?Sc\.?|M\.?Sc\.?|B\.?Tech|M\.?Tech|B\.?S\.?|M\.?S\.?|B\.?A\.?|M\.?A\.?)")
        .expect("valid regex")
});

static FIELD_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:in|of)\s+").expect("valid regex"));

static INSTITUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|institut|polytechnic|school|academy)\b")
        .expect("valid regex")
});

#[derive(Debug)]
struct HeaderMatch {
    position: String,
    company: String,
    location: Option<String>,
    dates: Option<String>,
}

type HeaderMatcher = fn(&str) -> Option<HeaderMatch>;

const HEADER_MATCHERS: &[(&str, HeaderMatcher)] = &[
    ("at_form", try_at_form),
    ("pipe_form", try_pipe_form),
    ("comma_form", try_comma_form),
];

fn match_header(line: &str) -> Option<(&'static str, HeaderMatch)> {
    if is_bullet_line(line) || line.len() > 120 {
        return None;
    }
    for &(name, matcher) in HEADER_MATCHERS {
        if let Some(header) = matcher(line) {
            return Some((name, header));
        }
    }
    None
}

fn try_at_form(line: &str) -> Option<HeaderMatch> {
    let caps = AT_FORM_RE.captures(line)?;
    let title = caps.name("title")?.as_str().trim();
    let org = caps.name("org")?.as_str().trim();
    let dates = caps.name("dates").map(|m| m.as_str().trim().to_string());
    // "Worked at Initech since 2019" would otherwise read the year into the
    // company name.
    if dates.is_none() && org.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(HeaderMatch {
        position: title.to_string(),
        company: org.to_string(),
        location: None,
        dates,
    })
}

fn try_pipe_form(line: &str) -> Option<HeaderMatch> {
    if !line.contains('|') {
        return None;
    }
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if !(2..=4).contains(&parts.len()) || parts.iter().any(|p| p.is_empty() || p.len() > 60) {
        return None;
    }
    let mut header = HeaderMatch {
        position: parts[0].to_string(),
        company: String::new(),
        location: None,
        dates: None,
    };
    for part in &parts[1..] {
        if header.dates.is_none() && looks_like_dates(part) {
            header.dates = Some((*part).to_string());
        } else if header.company.is_empty() {
            header.company = (*part).to_string();
        } else if header.location.is_none() {
            header.location = Some((*part).to_string());
        }
    }
    Some(header)
}

/// "Title, Company[, Location], Dates". The trailing segment must carry a
/// date, otherwise ordinary prose with commas would be taken for a header.
fn try_comma_form(line: &str) -> Option<HeaderMatch> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) || parts.iter().any(|p| p.is_empty() || p.len() > 60) {
        return None;
    }
    let last = parts[parts.len() - 1];
    if !looks_like_dates(last) {
        return None;
    }
    if !parts[0].chars().next().is_some_and(char::is_uppercase) {
        return None;
    }
    Some(HeaderMatch {
        position: parts[0].to_string(),
        company: parts[1].to_string(),
        location: (parts.len() == 4).then(|| parts[2].to_string()),
        dates: Some(last.to_string()),
    })
}

fn looks_like_dates(part: &str) -> bool {
    part.len() <= 30
        && (dates::parse_range(part).is_some()
            || dates::first_year(part).is_some()
            || dates::is_present_token(part))
}

/// Parses the experience section body into structured entries.
pub fn parse_experience(body: &str, vocab: &Vocabulary) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    for block in blocks(body) {
        let headers: Vec<(usize, &'static str, HeaderMatch)> = block
            .iter()
            .enumerate()
            .filter_map(|(i, line)| match_header(line).map(|(name, h)| (i, name, h)))
            .collect();

        if headers.is_empty() {
            match parse_stacked_block(&block, vocab) {
                Some(entry) => entries.push(entry),
                None => attach_to_previous(&block, &mut entries),
            }
            continue;
        }

        let starts: Vec<usize> = headers.iter().map(|h| h.0).collect();
        if starts[0] > 0 {
            attach_to_previous(&block[..starts[0]], &mut entries);
        }
        for (n, (start, name, header)) in headers.into_iter().enumerate() {
            let end = starts.get(n + 1).copied().unwrap_or(block.len());
            debug!(pattern = name, line = block[start].as_str(), "matched experience header");
            entries.push(finish_entry(header, &block[start + 1..end], vocab));
        }
    }
    entries
}

/// Groups of consecutive non-empty trimmed lines.
fn blocks(body: &str) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    let mut cur = Vec::new();
    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !cur.is_empty() {
                out.push(std::mem::take(&mut cur));
            }
        } else {
            cur.push(trimmed.to_string());
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

/// Title, company, and dates on consecutive lines with no inline separator.
/// Only counts as an entry when a date shows up within the first three lines.
fn parse_stacked_block(lines: &[String], vocab: &Vocabulary) -> Option<ExperienceEntry> {
    if lines.len() < 2 || is_bullet_line(&lines[0]) || lines[0].len() > 60 {
        return None;
    }
    let date_idx = lines
        .iter()
        .take(3)
        .position(|l| l.len() <= 40 && dates::parse_range(l).is_some())?;
    if date_idx == 0 {
        return None;
    }
    let company = if is_bullet_line(&lines[1]) {
        String::new()
    } else {
        dates::without_range(&lines[1])
    };
    let header = HeaderMatch {
        position: lines[0].clone(),
        company,
        location: None,
        dates: Some(lines[date_idx].clone()),
    };
    Some(finish_entry(header, &lines[date_idx + 1..], vocab))
}

fn attach_to_previous(lines: &[String], entries: &mut Vec<ExperienceEntry>) {
    let Some(prev) = entries.last_mut() else {
        debug!("experience block without a recognizable header skipped");
        return;
    };
    for line in lines {
        if is_bullet_line(line) {
            prev.achievements.push(strip_bullet(line).to_string());
        } else {
            if !prev.description.is_empty() {
                prev.description.push(' ');
            }
            prev.description.push_str(line);
        }
    }
}

fn finish_entry(header: HeaderMatch, body: &[String], vocab: &Vocabulary) -> ExperienceEntry {
    let mut range = header.dates.as_deref().and_then(parse_header_dates);
    let mut description_parts: Vec<&str> = Vec::new();
    let mut achievements: Vec<String> = Vec::new();
    let mut technologies: Vec<String> = Vec::new();

    for line in body {
        if let Some(listed) = technology_line(line) {
            merge_technologies(&mut technologies, listed);
            continue;
        }
        if is_bullet_line(line) {
            achievements.push(strip_bullet(line).to_string());
            continue;
        }
        if line.len() <= 40 {
            if let Some(found) = dates::parse_range(line) {
                if range.is_none() {
                    range = Some(found);
                }
                if dates::without_range(line).len() <= 12 {
                    continue;
                }
            }
        }
        description_parts.push(line.as_str());
    }

    let description = description_parts.join(" ");
    if range.is_none() {
        range = dates::parse_range(&description);
    }

    let scan = format!("{} {} {}", header.position, description, achievements.join(" "));
    merge_technologies(&mut technologies, vocab.technical_terms_in(&scan));

    let range = range.unwrap_or(DateRange {
        start_year: None,
        end_year: None,
        current: false,
    });
    ExperienceEntry {
        position: header.position,
        company: header.company,
        location: header.location,
        start_year: range.start_year,
        end_year: range.end_year,
        current: range.current,
        description,
        achievements,
        technologies,
    }
}

fn parse_header_dates(raw: &str) -> Option<DateRange> {
    if let Some(range) = dates::parse_range(raw) {
        return Some(range);
    }
    if let Some(year) = dates::first_year(raw) {
        let current = dates::is_present_token(raw);
        return Some(DateRange {
            start_year: Some(year),
            end_year: if current { None } else { Some(year) },
            current,
        });
    }
    if dates::is_present_token(raw) {
        return Some(DateRange {
            start_year: None,
            end_year: None,
            current: true,
        });
    }
    None
}

fn technology_line(line: &str) -> Option<Vec<String>> {
    let caps = TECH_LINE_RE.captures(strip_bullet(line))?;
    let items: Vec<String> = caps["list"]
        .split([',', ';', '|'])
        .map(str::trim)
        .filter(|item| !item.is_empty() && item.len() <= 40)
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

fn merge_technologies(into: &mut Vec<String>, additions: Vec<String>) {
    for tech in additions {
        if !into.iter().any(|t| t.eq_ignore_ascii_case(&tech)) {
            into.push(tech);
        }
    }
}

/// Parses the education section body. Blocks with neither a recognizable
/// degree nor an institution line are dropped.
pub fn parse_education(body: &str) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    for block in blocks(body) {
        let mut degree = String::new();
        let mut field = String::new();
        let mut institution = String::new();
        let mut range: Option<DateRange> = None;
        let mut fallback_year: Option<i32> = None;

        for raw in &block {
            let line = strip_bullet(raw);
            if degree.is_empty() {
                if let Some((found_degree, found_field)) = parse_degree_line(line) {
                    degree = found_degree;
                    field = found_field;
                }
            }
            if institution.is_empty() {
                if let Some(inst) = institution_in(line) {
                    institution = inst;
                }
            }
            if range.is_none() {
                range = dates::parse_range(line);
            }
            if fallback_year.is_none() {
                fallback_year = dates::first_year(line);
            }
        }

        if degree.is_empty() && institution.is_empty() {
            debug!("education block without degree or institution skipped");
            continue;
        }

        let (end_year, current) = match range {
            Some(r) if r.current => (None, true),
            Some(r) => (r.end_year.or(r.start_year), false),
            None => (fallback_year, false),
        };
        entries.push(EducationEntry {
            degree,
            field,
            institution,
            end_year,
            current,
        });
    }
    entries
}

/// Degree phrase and field of study from one line, e.g.
/// "BS in Computer Science, Stanford University" yields
/// ("BS in Computer Science", "Computer Science").
fn parse_degree_line(line: &str) -> Option<(String, String)> {
    let found = DEGREE_WORD_RE.find(line).or_else(|| {
        DEGREE_ABBR_RE
            .find_iter(line)
            .find(|m| abbr_has_field_context(&line[m.end()..]))
    })?;

    let tail = &line[found.start()..];
    let end = tail
        .find(|c: char| c == ',' || c.is_ascii_digit())
        .unwrap_or(tail.len());
    let mut phrase = tail[..end]
        .trim_end_matches(|c: char| c.is_whitespace() || "(-–".contains(c))
        .to_string();
    for cut in [" from ", " at "] {
        if let Some(i) = phrase.find(cut) {
            phrase.truncate(i);
        }
    }

    let field = FIELD_MARKER_RE
        .find_iter(&phrase)
        .last()
        .map(|m| phrase[m.end()..].trim().to_string())
        .filter(|f| !f.is_empty() && f.len() <= 60)
        .or_else(|| field_after(line, found.start()))
        .unwrap_or_default();

    Some((phrase, field))
}

/// "B.S., Computer Science, MIT" carries its field in the segment after the
/// degree rather than behind an "in"/"of" marker.
fn field_after(line: &str, from: usize) -> Option<String> {
    let rest = &line[from..];
    let after_comma = &rest[rest.find(',')? + 1..];
    let segment = after_comma.split(',').next()?.trim();
    if segment.is_empty()
        || segment.len() > 60
        || segment.chars().any(|c| c.is_ascii_digit())
        || INSTITUTION_RE.is_match(segment)
    {
        return None;
    }
    Some(segment.to_string())
}

/// Short degree abbreviations only count when followed by something that
/// reads like a field of study.
fn abbr_has_field_context(rest: &str) -> bool {
    let trimmed = rest.trim_start();
    trimmed.starts_with(',')
        || trimmed.starts_with("in ")
        || trimmed.starts_with("of ")
        || trimmed.chars().next().is_some_and(char::is_uppercase)
}

fn institution_in(line: &str) -> Option<String> {
    line.split(',')
        .map(str::trim)
        .find(|seg| INSTITUTION_RE.is_match(seg))
        .map(dates::without_range)
        .filter(|s| !s.is_empty())
}
