//! Actionable improvement suggestions derived from the structured profile.
//! Every finding becomes exactly one record; the list is sorted by priority
//! and left otherwise untouched.

use serde::Serialize;
use std::sync::Arc;

use crate::ats::analyzer::FileMetadata;
use crate::ats::heuristics;
use crate::ats::structure::ideal_order;
use crate::models::profile::StructuredProfile;
use crate::vocab::{term_in_text, Vocabulary};

const SHORT_SUMMARY_CHARS: usize = 50;
const THIN_DESCRIPTION_CHARS: usize = 50;
const MIN_SKILL_COUNT: usize = 5;
const MIN_TECH_TERMS: usize = 5;
const BUZZWORD_LIMIT: usize = 3;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 800;
const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Content,
    Formatting,
    Keywords,
    Structure,
    Grammar,
}

/// Ordered most severe first, so an ascending sort ranks the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub impact: String,
    pub category: String,
}

pub struct SuggestionEngine {
    vocab: Arc<Vocabulary>,
}

impl SuggestionEngine {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        SuggestionEngine { vocab }
    }

    pub fn generate(
        &self,
        resume: &StructuredProfile,
        file: Option<&FileMetadata>,
    ) -> Vec<Suggestion> {
        let mut out = Vec::new();
        self.content_findings(resume, &mut out);
        self.formatting_findings(file, &mut out);
        self.keyword_findings(resume, &mut out);
        self.structure_findings(resume, &mut out);
        self.grammar_findings(resume, &mut out);
        // Stable sort: generation order is preserved within a priority.
        out.sort_by_key(|s| s.priority);
        out
    }

    fn content_findings(&self, resume: &StructuredProfile, out: &mut Vec<Suggestion>) {
        match resume.personal.summary.as_deref().map(str::trim) {
            None | Some("") => out.push(suggestion(
                SuggestionKind::Content,
                Priority::High,
                "Add a professional summary",
                "Open with two or three sentences covering your role, years, and focus.",
                Some("summary"),
                "Recruiters decide in seconds; a summary frames everything below it.",
                "summary",
            )),
            Some(summary) if summary.len() < SHORT_SUMMARY_CHARS => out.push(suggestion(
                SuggestionKind::Content,
                Priority::Medium,
                "Expand the summary",
                "A one-line summary reads as a placeholder; spell out what you do.",
                Some("summary"),
                "A fuller summary gives screeners context for the rest.",
                "summary",
            )),
            Some(_) => {}
        }

        let thin = resume
            .experience
            .iter()
            .filter(|e| e.description.trim().len() < THIN_DESCRIPTION_CHARS && e.achievements.is_empty())
            .count();
        if thin > 0 && !resume.experience.is_empty() {
            out.push(suggestion(
                SuggestionKind::Content,
                Priority::Medium,
                "Flesh out experience entries",
                &format!("{thin} role(s) carry little or no description of what you did."),
                Some("experience"),
                "Empty roles read as filler and get skipped.",
                "experience_detail",
            ));
        }

        if !resume.experience.is_empty() && heuristics::count_quantifiable(&resume.raw_text) == 0 {
            out.push(suggestion(
                SuggestionKind::Content,
                Priority::High,
                "Quantify your achievements",
                "Add percentages, dollar amounts, or scale: requests per day, team size.",
                Some("experience"),
                "Numbers are what make an achievement verifiable.",
                "metrics",
            ));
        }

        let text_lower = resume.raw_text.to_lowercase();
        let weak: Vec<&str> = self
            .vocab
            .weak_verbs
            .iter()
            .filter(|v| term_in_text(&text_lower, v))
            .map(String::as_str)
            .collect();
        if !weak.is_empty() {
            out.push(suggestion(
                SuggestionKind::Content,
                Priority::Medium,
                "Replace weak openers",
                &format!("Phrases like \"{}\" hide your actual contribution.", weak.join("\", \"")),
                Some("experience"),
                "Strong verbs make the same work sound like yours.",
                "verbs",
            ));
        }

        if resume.skills.technical.len() + resume.skills.soft.len() < MIN_SKILL_COUNT {
            out.push(suggestion(
                SuggestionKind::Content,
                Priority::Medium,
                "List more skills",
                "Fewer than five skills gives matching engines almost nothing to work with.",
                Some("skills"),
                "Skills are the highest-weight signal in most screeners.",
                "skills",
            ));
        }

        if resume.projects.is_empty() {
            out.push(suggestion(
                SuggestionKind::Content,
                Priority::Low,
                "Add a projects section",
                "Projects show initiative and give concrete talking points.",
                Some("projects"),
                "Side work often differentiates otherwise similar candidates.",
                "projects",
            ));
        }
    }

    fn formatting_findings(&self, file: Option<&FileMetadata>, out: &mut Vec<Suggestion>) {
        let Some(file) = file else {
            return;
        };

        let is_pdf = file
            .mime_type
            .as_deref()
            .map(|m| m.to_lowercase().contains("pdf"))
            .or_else(|| {
                file.file_name
                    .as_deref()
                    .map(|n| n.to_lowercase().ends_with(".pdf"))
            });
        if is_pdf == Some(false) {
            out.push(suggestion(
                SuggestionKind::Formatting,
                Priority::Medium,
                "Convert the file to PDF",
                "PDF survives ATS text extraction most reliably.",
                None,
                "Extraction artifacts in other formats can scramble sections.",
                "file_format",
            ));
        }

        match file.size_bytes {
            Some(size) if size > 5 * MB => out.push(suggestion(
                SuggestionKind::Formatting,
                Priority::Medium,
                "Reduce the file size below 5MB",
                "Compress embedded images or export with lighter settings.",
                None,
                "Some systems silently reject oversized uploads.",
                "file_size",
            )),
            Some(size) if size > 2 * MB => out.push(suggestion(
                SuggestionKind::Formatting,
                Priority::Low,
                "Reduce the file size",
                "A resume rarely needs more than 2MB.",
                None,
                "Smaller files upload and parse faster.",
                "file_size",
            )),
            _ => {}
        }
    }

    fn keyword_findings(&self, resume: &StructuredProfile, out: &mut Vec<Suggestion>) {
        let text_lower = resume.raw_text.to_lowercase();

        if self.vocab.technical_terms_in(&resume.raw_text).len() < MIN_TECH_TERMS {
            out.push(suggestion(
                SuggestionKind::Keywords,
                Priority::High,
                "Add technical keywords",
                "Name the languages, frameworks, and platforms you actually used.",
                Some("skills"),
                "Keyword filters run before any human reads the resume.",
                "tech_keywords",
            ));
        }

        let has_soft = self
            .vocab
            .soft_skills
            .iter()
            .any(|s| term_in_text(&text_lower, s));
        if !has_soft {
            out.push(suggestion(
                SuggestionKind::Keywords,
                Priority::Low,
                "Show collaboration skills",
                "Mention leadership, mentoring, or cross-team work where it happened.",
                None,
                "Senior roles screen for more than the tech stack.",
                "soft_keywords",
            ));
        }

        let buzzwords: Vec<&str> = self
            .vocab
            .buzzwords
            .iter()
            .filter(|b| term_in_text(&text_lower, b))
            .map(String::as_str)
            .collect();
        if buzzwords.len() >= BUZZWORD_LIMIT {
            out.push(suggestion(
                SuggestionKind::Keywords,
                Priority::Medium,
                "Cut the buzzwords",
                &format!("\"{}\" carry no information.", buzzwords.join("\", \"")),
                None,
                "Buzzwords crowd out the keywords that actually match.",
                "buzzwords",
            ));
        }
    }

    fn structure_findings(&self, resume: &StructuredProfile, out: &mut Vec<Suggestion>) {
        let words = heuristics::word_count(&resume.raw_text);
        if words < MIN_WORDS {
            out.push(suggestion(
                SuggestionKind::Structure,
                Priority::High,
                "Expand the resume",
                &format!("At {words} words the resume reads as incomplete; aim for 200 to 800."),
                None,
                "Screeners treat very short resumes as missing experience.",
                "length",
            ));
        } else if words > MAX_WORDS {
            out.push(suggestion(
                SuggestionKind::Structure,
                Priority::Medium,
                "Tighten the resume",
                "Cut to the most recent and most relevant work.",
                None,
                "Long resumes bury the strongest material.",
                "length",
            ));
        }

        if ideal_order(&resume.raw_text) == Some(false) {
            out.push(suggestion(
                SuggestionKind::Structure,
                Priority::Low,
                "Reorder sections",
                "Lead with a summary, then experience, then education.",
                None,
                "Screeners and parsers both expect this order.",
                "section_order",
            ));
        }
    }

    fn grammar_findings(&self, resume: &StructuredProfile, out: &mut Vec<Suggestion>) {
        let text = &resume.raw_text;
        let text_lower = text.to_lowercase();

        let misspelled: Vec<&str> = self
            .vocab
            .misspellings
            .iter()
            .filter(|m| term_in_text(&text_lower, m))
            .map(String::as_str)
            .collect();
        if !misspelled.is_empty() {
            out.push(suggestion(
                SuggestionKind::Grammar,
                Priority::Critical,
                "Fix misspellings",
                &format!("Found: {}.", misspelled.join(", ")),
                None,
                "A misspelled keyword is invisible to ATS search.",
                "spelling",
            ));
        }

        if heuristics::count_first_person(text) > 2 {
            out.push(suggestion(
                SuggestionKind::Grammar,
                Priority::Medium,
                "Remove first-person pronouns",
                "Resume convention drops I and my; start each line with the verb.",
                None,
                "Pronouns spend words without adding signal.",
                "pronouns",
            ));
        }

        if heuristics::count_passive_voice(text) > 3 {
            out.push(suggestion(
                SuggestionKind::Grammar,
                Priority::Medium,
                "Use active voice",
                "Say what you did, not what was done.",
                None,
                "Active phrasing reads as ownership.",
                "passive_voice",
            ));
        }
    }
}

fn suggestion(
    kind: SuggestionKind,
    priority: Priority,
    title: &str,
    description: &str,
    section: Option<&str>,
    impact: &str,
    category: &str,
) -> Suggestion {
    Suggestion {
        kind,
        priority,
        title: title.to_string(),
        description: description.to_string(),
        section: section.map(str::to_string),
        impact: impact.to_string(),
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SuggestionEngine {
        SuggestionEngine::new(Arc::new(Vocabulary::default()))
    }

    fn resume_with_text(text: &str) -> StructuredProfile {
        StructuredProfile {
            raw_text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_short_resume_gets_structure_length_suggestion() {
        let text = "Backend work on billing systems. ".repeat(30); // 150 words
        let found = engine().generate(&resume_with_text(&text), None);
        assert!(found
            .iter()
            .any(|s| s.kind == SuggestionKind::Structure && s.category == "length"));
    }

    #[test]
    fn test_misspellings_rank_first() {
        let resume = resume_with_text("Helped recieve the managment reports every week.");
        let found = engine().generate(&resume, None);
        assert_eq!(found[0].priority, Priority::Critical);
        assert_eq!(found[0].category, "spelling");
        assert!(found.windows(2).all(|w| w[0].priority <= w[1].priority));
    }

    #[test]
    fn test_weak_verbs_flagged() {
        let resume = resume_with_text("Responsible for deployments. Worked on tooling.");
        let found = engine().generate(&resume, None);
        let verbs = found
            .iter()
            .find(|s| s.category == "verbs")
            .expect("weak verb suggestion");
        assert!(verbs.description.contains("responsible for"));
        assert!(verbs.description.contains("worked on"));
    }

    #[test]
    fn test_oversized_non_pdf_file_findings() {
        let file = FileMetadata {
            file_name: Some("resume.docx".to_string()),
            mime_type: None,
            size_bytes: Some(6 * MB),
        };
        let found = engine().generate(&resume_with_text("text"), Some(&file));
        assert!(found.iter().any(|s| s.category == "file_format"));
        assert!(found.iter().any(|s| s.category == "file_size"));
    }

    #[test]
    fn test_strong_resume_produces_no_critical_findings() {
        let mut resume = resume_with_text(
            &"Delivered the payments platform rewrite and cut processing costs 30% for the team. "
                .repeat(10),
        );
        resume.personal.summary =
            Some("Senior engineer shipping reliable payment systems for a decade.".to_string());
        resume.skills.technical = vec![
            "rust".to_string(),
            "python".to_string(),
            "aws".to_string(),
            "docker".to_string(),
            "postgresql".to_string(),
        ];
        let found = engine().generate(&resume, None);
        assert!(found.iter().all(|s| s.priority != Priority::Critical));
        assert!(!found.iter().any(|s| s.category == "summary"));
    }

    #[test]
    fn test_buzzword_overuse_flagged() {
        let resume = resume_with_text(
            "A passionate rockstar ninja who delivers synergy across dynamic teams.",
        );
        let found = engine().generate(&resume, None);
        assert!(found.iter().any(|s| s.category == "buzzwords"));
    }
}
