//! Projects, awards, publications, and volunteering all share one shape:
//! a titled item with optional free text, an optional year, and sometimes
//! a link. One parser covers all four sections.

use crate::extraction::contact::first_url;
use crate::extraction::dates;
use crate::extraction::sections::{is_bullet_line, strip_bullet};
use crate::models::profile::ActivityEntry;

const MAX_TITLE_LEN: usize = 80;

/// Parses a list-shaped section body into activity entries. Bullet lists
/// yield one entry per bullet; otherwise each blank-line block becomes an
/// entry with its first line as the title.
pub fn parse_activities(body: &str) -> Vec<ActivityEntry> {
    let lines: Vec<&str> = body.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let bullet_count = lines.iter().filter(|l| is_bullet_line(l)).count();
    if bullet_count * 2 >= lines.len() {
        lines
            .iter()
            .filter(|l| is_bullet_line(l))
            .filter_map(|l| entry_from_text(strip_bullet(l), None))
            .collect()
    } else {
        blank_line_blocks(body)
            .into_iter()
            .filter_map(|block| {
                let (first, rest) = block.split_first()?;
                let description = (!rest.is_empty()).then(|| rest.join(" "));
                entry_from_text(first, description)
            })
            .collect()
    }
}

fn blank_line_blocks(body: &str) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    let mut cur: Vec<String> = Vec::new();
    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !cur.is_empty() {
                out.push(std::mem::take(&mut cur));
            }
        } else {
            cur.push(strip_bullet(trimmed).to_string());
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out
}

/// Builds an entry from an item's text. "Title - description" and
/// "Title: description" split into the two fields; the year and link are
/// pulled from wherever they appear.
fn entry_from_text(text: &str, extra_description: Option<String>) -> Option<ActivityEntry> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let year = dates::first_year(text)
        .or_else(|| extra_description.as_deref().and_then(dates::first_year));
    let link = first_url(text).or_else(|| extra_description.as_deref().and_then(first_url));

    let (mut title, inline_description) = match text.split_once(" - ").or_else(|| text.split_once(": ")) {
        Some((left, right)) => (left.trim().to_string(), Some(right.trim().to_string())),
        None => (text.to_string(), None),
    };
    title = dates::without_range(&title);
    if let Some(url) = &link {
        title = title.replace(url.as_str(), "");
    }
    if let Some(year) = year {
        title = title.replace(&year.to_string(), "");
    }
    title = title
        .trim_matches(|c: char| c.is_whitespace() || "()-–,|".contains(c))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if title.is_empty() || title.len() > MAX_TITLE_LEN {
        return None;
    }

    let description = match (inline_description, extra_description) {
        (Some(inline), Some(extra)) => Some(format!("{inline} {extra}")),
        (Some(inline), None) => Some(inline),
        (None, Some(extra)) => Some(extra),
        (None, None) => None,
    };

    Some(ActivityEntry {
        title,
        description,
        year,
        link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_list_one_entry_per_bullet() {
        let body = "- Flowlog - structured logging library for Rust\n\
            - Homelab dashboard: self-hosted metrics viewer (2023)";
        let entries = parse_activities(body);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Flowlog");
        assert_eq!(
            entries[0].description.as_deref(),
            Some("structured logging library for Rust")
        );
        assert!(entries[0].year.is_none());
        assert_eq!(entries[1].title, "Homelab dashboard");
        assert_eq!(entries[1].year, Some(2023));
    }

    #[test]
    fn test_block_entries_with_link() {
        let body = "Open Data Pipeline\n\
            Nightly ETL for city transit feeds. https://github.com/jdoe/pipeline\n\
            \n\
            Conference Talk (2022)\n\
            Spoke about schema migrations.";
        let entries = parse_activities(body);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Open Data Pipeline");
        assert_eq!(entries[0].link.as_deref(), Some("https://github.com/jdoe/pipeline"));
        assert_eq!(entries[1].title, "Conference Talk");
        assert_eq!(entries[1].year, Some(2022));
        assert_eq!(entries[1].description.as_deref(), Some("Spoke about schema migrations."));
    }

    #[test]
    fn test_empty_body_yields_nothing() {
        assert!(parse_activities("\n  \n").is_empty());
    }
}
