//! Experience fit scoring.
//!
//! Required years come from the job text when it states them; the posting's
//! seniority level is only a fallback. Patterns are ordered, and the first
//! one that matches anywhere in the text decides.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::job::JobProfile;
use crate::models::profile::StructuredProfile;

static YEARS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(\d{1,2})\s*\+?\s*years?\s+(?:of\s+)?(?:\w+\s+){0,3}?experience",
        r"(?i)at\s+least\s+(\d{1,2})\s+years?",
        r"(?i)minimum\s+(?:of\s+)?(\d{1,2})\s+years?",
        r"(?i)(\d{1,2})\s*-\s*\d{1,2}\s+years?",
        r"(?i)(\d{1,2})\s*\+?\s*years?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

#[derive(Debug, Clone)]
pub struct ExperienceScore {
    pub score: u32,
    pub actual_years: f64,
    pub required_years: f64,
    pub gap_years: f64,
    pub meets_requirement: bool,
}

/// Total years across experience entries. Entries without a start year
/// contribute nothing; an entry marked current runs to `current_year`.
pub fn resume_years(profile: &StructuredProfile, current_year: i32) -> f64 {
    profile
        .experience
        .iter()
        .map(|entry| {
            let Some(start) = entry.start_year else {
                return 0.0;
            };
            let end = if entry.current {
                current_year
            } else {
                entry.end_year.unwrap_or(start)
            };
            f64::from((end - start).max(0))
        })
        .sum()
}

/// Years the job asks for: the first matching pattern in the description
/// and requirements, else the seniority level's baseline.
pub fn required_years(job: &JobProfile) -> f64 {
    let text = format!("{} {}", job.description, job.requirements.join(" "));
    for pattern in YEARS_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&text) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) {
                return years;
            }
        }
    }
    job.experience_level.required_years()
}

pub fn score_experience(
    profile: &StructuredProfile,
    job: &JobProfile,
    current_year: i32,
) -> ExperienceScore {
    let actual = resume_years(profile, current_year);
    let required = required_years(job);
    ExperienceScore {
        score: band(actual, required),
        actual_years: actual,
        required_years: required,
        gap_years: (required - actual).max(0.0),
        meets_requirement: actual >= required,
    }
}

fn band(actual: f64, required: f64) -> u32 {
    if required == 0.0 {
        return 100;
    }
    if actual == 0.0 {
        return if required <= 1.0 { 80 } else { 20 };
    }
    let ratio = actual / required;
    if ratio >= 1.0 {
        100
    } else if ratio >= 0.8 {
        90
    } else if ratio >= 0.6 {
        75
    } else if ratio >= 0.4 {
        50
    } else {
        25
    }
}
