//! Keyword tokenization and skill mention reporting.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::profile::StructuredProfile;
use crate::vocab::Vocabulary;

/// Keyword lists are capped so a pathological document cannot balloon the
/// response or the downstream match work.
pub const MAX_KEYWORDS: usize = 100;

const MIN_TOKEN_LEN: usize = 3;

const SKILLS_SECTION_CONFIDENCE: f32 = 0.9;
const EXPERIENCE_CONFIDENCE: f32 = 0.8;

/// A skill together with where it was seen and how reliable the sighting is.
/// A listing in the skills section outranks an inference from experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMention {
    pub skill: String,
    pub confidence: f32,
    pub context: String,
    pub category: String,
}

/// Lowercased, deduplicated word tokens in order of first appearance.
/// Tokens shorter than three characters and stop words are dropped.
pub fn tokenize(text: &str, vocab: &Vocabulary) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for token in text.to_lowercase().split(|c: char| !c.is_alphanumeric()) {
        if token.len() < MIN_TOKEN_LEN || vocab.is_stop_word(token) || seen.contains(token) {
            continue;
        }
        seen.insert(token.to_string());
        out.push(token.to_string());
    }
    out
}

/// Matchable keywords for a profile, capped at [`MAX_KEYWORDS`].
pub fn extract_keywords(profile: &StructuredProfile, vocab: &Vocabulary) -> Vec<String> {
    let mut keywords = tokenize(&profile.raw_text, vocab);
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Skill mentions across the profile. Duplicates collapse onto the highest
/// confidence sighting.
pub fn extract_skills(profile: &StructuredProfile, vocab: &Vocabulary) -> Vec<SkillMention> {
    let mut mentions: Vec<SkillMention> = Vec::new();

    for skill in &profile.skills.technical {
        push_mention(&mut mentions, skill, SKILLS_SECTION_CONFIDENCE, "skills section", "technical");
    }
    for skill in &profile.skills.soft {
        push_mention(&mut mentions, skill, SKILLS_SECTION_CONFIDENCE, "skills section", "soft");
    }

    for entry in &profile.experience {
        let context = if entry.company.is_empty() {
            entry.position.clone()
        } else {
            format!("{} at {}", entry.position, entry.company)
        };
        for tech in &entry.technologies {
            let category = if vocab.is_soft(tech) { "soft" } else { "technical" };
            push_mention(&mut mentions, tech, EXPERIENCE_CONFIDENCE, &context, category);
        }
    }
    mentions
}

fn push_mention(
    mentions: &mut Vec<SkillMention>,
    skill: &str,
    confidence: f32,
    context: &str,
    category: &str,
) {
    if let Some(existing) = mentions.iter_mut().find(|m| m.skill.eq_ignore_ascii_case(skill)) {
        if confidence > existing.confidence {
            existing.confidence = confidence;
            existing.context = context.to_string();
        }
        return;
    }
    mentions.push(SkillMention {
        skill: skill.to_string(),
        confidence,
        context: context.to_string(),
        category: category.to_string(),
    });
}
