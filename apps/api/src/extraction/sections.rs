//! Splits raw résumé text into named sections by heading detection.
//!
//! Each canonical section owns an ordered synonym list. Segmentation tries
//! the synonyms in order and the first one that matches a heading line wins
//! (first-match-wins, not longest-match). A section's body runs from the line
//! after its heading to the next recognized heading of any section, or to
//! end-of-document.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Awards,
    Publications,
    Volunteering,
    Certifications,
    Languages,
}

impl SectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Awards => "awards",
            SectionKind::Publications => "publications",
            SectionKind::Volunteering => "volunteering",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
        }
    }
}

/// Synonyms are disjoint across sections and ordered by precedence within
/// each section.
const SECTION_SYNONYMS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Summary,
        &["summary", "professional summary", "profile", "objective", "about me", "about"],
    ),
    (
        SectionKind::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment history",
            "employment",
            "work history",
            "career history",
        ],
    ),
    (
        SectionKind::Education,
        &["education", "academic background", "academics", "qualifications"],
    ),
    (
        SectionKind::Skills,
        &[
            "skills",
            "technical skills",
            "core competencies",
            "competencies",
            "technologies",
            "areas of expertise",
        ],
    ),
    (
        SectionKind::Projects,
        &["projects", "personal projects", "key projects", "portfolio"],
    ),
    (
        SectionKind::Awards,
        &["awards", "honors", "achievements", "accomplishments"],
    ),
    (SectionKind::Publications, &["publications", "papers", "research"]),
    (
        SectionKind::Volunteering,
        &["volunteering", "volunteer experience", "volunteer work", "community involvement"],
    ),
    (
        SectionKind::Certifications,
        &["certifications", "certificates", "licenses"],
    ),
    (SectionKind::Languages, &["languages"]),
];

const MAX_HEADING_LEN: usize = 60;
pub(crate) const BULLET_CHARS: &[char] = &['-', '*', '•', '·', '‣'];

/// Whether a trimmed line is a bullet item rather than prose or a heading.
pub(crate) fn is_bullet_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with(BULLET_CHARS) && trimmed.len() > 1
}

/// The text of a bullet item with its marker removed. Lines without a
/// marker come back trimmed but otherwise untouched.
pub(crate) fn strip_bullet(line: &str) -> &str {
    line.trim().trim_start_matches(BULLET_CHARS).trim_start()
}

/// One segmented section: where its heading starts in the raw text, and the
/// body text up to the next heading.
#[derive(Debug, Clone)]
pub struct SectionSpan {
    pub heading_offset: usize,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    spans: HashMap<SectionKind, SectionSpan>,
}

impl SectionMap {
    pub fn get(&self, kind: SectionKind) -> Option<&SectionSpan> {
        self.spans.get(&kind)
    }

    pub fn body(&self, kind: SectionKind) -> Option<&str> {
        self.spans.get(&kind).map(|s| s.body.as_str())
    }

    pub fn heading_offset(&self, kind: SectionKind) -> Option<usize> {
        self.spans.get(&kind).map(|s| s.heading_offset)
    }
}

/// Normalizes a line for heading comparison. Returns None when the line
/// cannot be a heading (empty, too long, or a bullet item).
fn normalize_heading(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_HEADING_LEN {
        return None;
    }
    if trimmed.starts_with(BULLET_CHARS) {
        return None;
    }
    let stripped = trimmed.trim_end_matches(':').trim_end();
    let normalized = stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Which section, if any, a line's normalized form is a heading of.
fn heading_kind(normalized: &str) -> Option<SectionKind> {
    for (kind, synonyms) in SECTION_SYNONYMS {
        if synonyms.contains(&normalized) {
            return Some(*kind);
        }
    }
    None
}

/// Whether a raw line would segment as a section heading. Used by the name
/// heuristic to avoid mistaking "Professional Summary" for a person.
pub(crate) fn is_recognized_heading(line: &str) -> bool {
    normalize_heading(line)
        .as_deref()
        .and_then(heading_kind)
        .is_some()
}

pub fn split_sections(raw: &str) -> SectionMap {
    // Line records with byte offsets, plus the normalized heading form of
    // every heading-shaped line.
    let mut offset = 0usize;
    let mut lines: Vec<(usize, &str)> = Vec::new();
    for line in raw.split('\n') {
        lines.push((offset, line));
        offset += line.len() + 1;
    }

    let normalized: Vec<Option<String>> =
        lines.iter().map(|(_, l)| normalize_heading(l)).collect();
    let is_heading: Vec<bool> = normalized
        .iter()
        .map(|n| n.as_deref().and_then(heading_kind).is_some())
        .collect();

    let mut map = SectionMap::default();

    for (kind, synonyms) in SECTION_SYNONYMS {
        let hit = synonyms.iter().find_map(|syn| {
            normalized
                .iter()
                .position(|n| n.as_deref() == Some(*syn))
        });
        let Some(heading_idx) = hit else { continue };

        let mut body_lines: Vec<&str> = Vec::new();
        for j in heading_idx + 1..lines.len() {
            if is_heading[j] {
                break;
            }
            body_lines.push(lines[j].1);
        }
        let body = body_lines.join("\n").trim().to_string();

        map.spans.insert(
            *kind,
            SectionSpan {
                heading_offset: lines[heading_idx].0,
                body,
            },
        );
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_detection_and_stripping() {
        assert!(is_bullet_line("- Reduced latency by 40%"));
        assert!(is_bullet_line("  • Mentored four engineers"));
        assert!(!is_bullet_line("Reduced latency by 40%"));
        assert_eq!(strip_bullet("• Mentored four engineers"), "Mentored four engineers");
        assert_eq!(strip_bullet("plain text"), "plain text");
    }

    const SAMPLE: &str = "Jane Doe\n\
        jane@example.com\n\
        \n\
        SUMMARY\n\
        Seasoned backend engineer.\n\
        \n\
        Work Experience:\n\
        Engineer at Initech (2019 - Present)\n\
        Built billing services.\n\
        \n\
        Education\n\
        BS in Computer Science, State University, 2018\n\
        \n\
        Skills\n\
        Python, Rust, PostgreSQL";

    #[test]
    fn test_splits_all_labeled_sections() {
        let map = split_sections(SAMPLE);
        assert!(map.body(SectionKind::Summary).is_some());
        assert!(map.body(SectionKind::Experience).is_some());
        assert!(map.body(SectionKind::Education).is_some());
        assert!(map.body(SectionKind::Skills).is_some());
        assert!(map.body(SectionKind::Projects).is_none());
    }

    #[test]
    fn test_body_runs_until_next_heading() {
        let map = split_sections(SAMPLE);
        let body = map.body(SectionKind::Experience).unwrap();
        assert!(body.contains("Engineer at Initech"));
        assert!(body.contains("Built billing services."));
        assert!(!body.contains("BS in Computer Science"));
    }

    #[test]
    fn test_last_section_runs_to_end_of_document() {
        let map = split_sections(SAMPLE);
        assert_eq!(
            map.body(SectionKind::Skills).unwrap(),
            "Python, Rust, PostgreSQL"
        );
    }

    #[test]
    fn test_heading_match_ignores_case_and_colon() {
        let map = split_sections("TECHNICAL SKILLS:\nRust");
        assert_eq!(map.body(SectionKind::Skills), Some("Rust"));
    }

    #[test]
    fn test_first_synonym_wins_over_document_order() {
        // "employment history" appears first in the document, but the synonym
        // "experience" is tried first and matches the later heading.
        let text = "Employment History\nOld format entry\n\nExperience\nNew format entry";
        let map = split_sections(text);
        assert_eq!(map.body(SectionKind::Experience), Some("New format entry"));
    }

    #[test]
    fn test_bullet_line_is_not_a_heading() {
        let text = "Skills\n- Experience with Rust\n- Postgres";
        let map = split_sections(text);
        let body = map.body(SectionKind::Skills).unwrap();
        assert!(body.contains("Experience with Rust"));
        assert!(map.body(SectionKind::Experience).is_none());
    }

    #[test]
    fn test_long_line_is_not_a_heading() {
        let text =
            "Summary\nMy experience with education and skills spans many years of work across teams and companies.";
        let map = split_sections(text);
        assert!(map.body(SectionKind::Summary).unwrap().contains("spans many years"));
        assert!(map.body(SectionKind::Education).is_none());
    }

    #[test]
    fn test_synonym_table_is_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for (_, synonyms) in SECTION_SYNONYMS {
            for syn in *synonyms {
                assert!(seen.insert(*syn), "duplicate synonym across sections: {syn}");
            }
        }
    }

    #[test]
    fn test_heading_offsets_follow_document_order() {
        let map = split_sections(SAMPLE);
        let summary = map.heading_offset(SectionKind::Summary).unwrap();
        let experience = map.heading_offset(SectionKind::Experience).unwrap();
        let education = map.heading_offset(SectionKind::Education).unwrap();
        assert!(summary < experience);
        assert!(experience < education);
    }

    #[test]
    fn test_about_maps_to_summary() {
        let map = split_sections("About\nI build things.");
        assert_eq!(map.body(SectionKind::Summary), Some("I build things."));
    }

    #[test]
    fn test_empty_document_yields_empty_map() {
        let map = split_sections("");
        assert!(map.body(SectionKind::Summary).is_none());
        assert!(map.body(SectionKind::Experience).is_none());
    }
}
