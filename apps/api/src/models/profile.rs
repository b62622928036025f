//! Structured profile, the normalized semantic representation of a résumé.
//!
//! Every list defaults to empty, never null, so downstream scoring code never
//! branches on absence vs emptiness. Scoring, ranking, ATS analysis, and
//! suggestion generation all borrow the profile read-only.

use serde::{Deserialize, Serialize};

/// Contact details extracted by whole-document regex search, independent of
/// section boundaries. Each field is first-match-wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub links: Vec<String>,
    /// Free-text professional summary, truncated to 500 chars at extraction.
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub location: Option<String>,
    pub start_year: Option<i32>,
    /// None while `current` is true or when no end year was found.
    pub end_year: Option<i32>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub end_year: Option<i32>,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: Option<String>,
}

/// Skill lists are insertion-ordered and deduplicated case-insensitively by
/// the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<LanguageEntry>,
    pub certifications: Vec<Certification>,
}

impl SkillSet {
    /// All matchable skill names, technical first.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .map(String::as_str)
    }
}

/// Loosely-typed record for projects, awards, publications, and volunteering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredProfile {
    pub personal: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
    pub projects: Vec<ActivityEntry>,
    pub awards: Vec<ActivityEntry>,
    pub publications: Vec<ActivityEntry>,
    pub volunteering: Vec<ActivityEntry>,
    /// Original text, retained for keyword and readability heuristics.
    pub raw_text: String,
    /// Precomputed embedding supplied by the caller; the engine never
    /// generates one itself.
    pub embedding: Option<Vec<f32>>,
}
