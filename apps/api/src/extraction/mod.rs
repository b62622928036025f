//! Résumé text structuring.
//!
//! `extract_structured_content` never fails: whatever the heuristics cannot
//! recover stays at its default and the gap is logged at debug level. Bad
//! input degrades to an emptier profile, not an error.

pub mod contact;
pub mod dates;
pub mod extras;
pub mod handlers;
pub mod history;
pub mod keywords;
pub mod sections;
pub mod skills;

use tracing::debug;

use crate::models::profile::{SkillSet, StructuredProfile};
use crate::vocab::Vocabulary;
use sections::SectionKind;

/// Builds a structured profile from raw résumé text.
pub fn extract_structured_content(raw_text: &str, vocab: &Vocabulary) -> StructuredProfile {
    let section_map = sections::split_sections(raw_text);
    for kind in [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
    ] {
        if section_map.get(kind).is_none() {
            debug!(section = kind.name(), "section heading not found");
        }
    }

    let mut personal = contact::extract_personal_info(raw_text);
    personal.summary = section_map
        .body(SectionKind::Summary)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(truncate_summary);

    let experience = section_map
        .body(SectionKind::Experience)
        .map(|body| history::parse_experience(body, vocab))
        .unwrap_or_default();

    let education = section_map
        .body(SectionKind::Education)
        .map(history::parse_education)
        .unwrap_or_default();

    // Without a skills section, fall back to scanning the whole document so
    // the profile still has something to match against.
    let (technical, soft) = match section_map.body(SectionKind::Skills) {
        Some(body) => skills::parse_skills(body, vocab),
        None => (vocab.technical_terms_in(raw_text), Vec::new()),
    };

    let languages = section_map
        .body(SectionKind::Languages)
        .map(skills::parse_languages)
        .unwrap_or_default();

    let certifications = section_map
        .body(SectionKind::Certifications)
        .map(skills::parse_certifications)
        .unwrap_or_default();

    StructuredProfile {
        personal,
        experience,
        education,
        skills: SkillSet {
            technical,
            soft,
            languages,
            certifications,
        },
        projects: activities(&section_map, SectionKind::Projects),
        awards: activities(&section_map, SectionKind::Awards),
        publications: activities(&section_map, SectionKind::Publications),
        volunteering: activities(&section_map, SectionKind::Volunteering),
        raw_text: raw_text.to_string(),
        embedding: None,
    }
}

const MAX_SUMMARY_LEN: usize = 500;

/// Summaries are capped at 500 characters; the full text remains available
/// in `raw_text`.
fn truncate_summary(body: &str) -> String {
    if body.chars().count() <= MAX_SUMMARY_LEN {
        return body.to_string();
    }
    body.chars().take(MAX_SUMMARY_LEN).collect()
}

fn activities(
    map: &sections::SectionMap,
    kind: SectionKind,
) -> Vec<crate::models::profile::ActivityEntry> {
    map.body(kind).map(extras::parse_activities).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\
        jane.doe@example.com | (415) 555-0134\n\
        \n\
        Summary\n\
        Backend engineer with a decade of distributed systems work.\n\
        \n\
        Experience\n\
        Senior Engineer at Initech (2019 - Present)\n\
        - Cut p99 checkout latency by 40%\n\
        Technologies: Rust, Kafka\n\
        \n\
        Engineer at Globex (2015 - 2019)\n\
        Built internal tooling in Python.\n\
        \n\
        Education\n\
        BS in Computer Science, Stanford University, 2011 - 2015\n\
        \n\
        Skills\n\
        Rust, Python, Kafka, Communication\n\
        \n\
        Projects\n\
        - Flowlog - structured logging library\n";

    #[test]
    fn test_full_document_structuring() {
        let vocab = Vocabulary::default();
        let profile = extract_structured_content(SAMPLE, &vocab);

        assert_eq!(profile.personal.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.personal.email.as_deref(), Some("jane.doe@example.com"));
        assert!(profile
            .personal
            .summary
            .as_deref()
            .unwrap()
            .starts_with("Backend engineer"));

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].company, "Initech");
        assert!(profile.experience[0].current);
        assert_eq!(profile.experience[1].start_year, Some(2015));

        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].institution, "Stanford University");

        assert_eq!(profile.skills.technical, vec!["Rust", "Python", "Kafka"]);
        assert_eq!(profile.skills.soft, vec!["Communication"]);

        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.projects[0].title, "Flowlog");

        assert_eq!(profile.raw_text, SAMPLE);
        assert!(profile.embedding.is_none());
    }

    #[test]
    fn test_empty_document_yields_default_profile() {
        let vocab = Vocabulary::default();
        let profile = extract_structured_content("", &vocab);
        assert!(profile.personal.name.is_none());
        assert!(profile.experience.is_empty());
        assert!(profile.skills.technical.is_empty());
    }

    #[test]
    fn test_summary_truncated_to_500_chars() {
        let vocab = Vocabulary::default();
        let text = format!("Summary\n{}", "a".repeat(800));
        let profile = extract_structured_content(&text, &vocab);
        assert_eq!(profile.personal.summary.as_deref().unwrap().len(), 500);
    }

    #[test]
    fn test_unsectioned_text_still_finds_skills() {
        let vocab = Vocabulary::default();
        let profile =
            extract_structured_content("I build services with Rust and PostgreSQL.", &vocab);
        assert!(profile.skills.technical.contains(&"rust".to_string()));
        assert!(profile.skills.technical.contains(&"postgresql".to_string()));
    }
}
