//! Job posting model consumed by the scoring and ranking services.

use serde::{Deserialize, Serialize};

/// Seniority band of a posting. Drives the fallback experience requirement
/// when the posting text carries no explicit "N years" phrase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    /// Fallback years-of-experience requirement per level.
    pub fn required_years(&self) -> f64 {
        match self {
            ExperienceLevel::Entry => 0.0,
            ExperienceLevel::Mid => 3.0,
            ExperienceLevel::Senior => 7.0,
            ExperienceLevel::Lead => 10.0,
            ExperienceLevel::Executive => 15.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

/// A job posting as supplied by the caller. `skills` and `requirements`
/// arrive already itemized; free text lives in `description`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub salary_range: Option<SalaryRange>,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    /// Precomputed embedding supplied by the caller, if any.
    pub embedding: Option<Vec<f32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_years_lookup_table() {
        assert_eq!(ExperienceLevel::Entry.required_years(), 0.0);
        assert_eq!(ExperienceLevel::Mid.required_years(), 3.0);
        assert_eq!(ExperienceLevel::Senior.required_years(), 7.0);
        assert_eq!(ExperienceLevel::Lead.required_years(), 10.0);
        assert_eq!(ExperienceLevel::Executive.required_years(), 15.0);
    }

    #[test]
    fn test_experience_level_serde_snake_case() {
        let level: ExperienceLevel = serde_json::from_str(r#""senior""#).unwrap();
        assert_eq!(level, ExperienceLevel::Senior);
        assert_eq!(serde_json::to_string(&level).unwrap(), r#""senior""#);
    }

    #[test]
    fn test_experience_level_default_is_mid() {
        assert_eq!(ExperienceLevel::default(), ExperienceLevel::Mid);
    }

    #[test]
    fn test_job_profile_deserializes_with_minimal_fields() {
        let json = r#"{
            "title": "Backend Engineer",
            "company": "Initech",
            "description": "Build services",
            "requirements": ["5+ years experience"],
            "responsibilities": [],
            "skills": ["rust", "postgres"],
            "experience_level": "senior"
        }"#;
        let job: JobProfile = serde_json::from_str(json).unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.skills.len(), 2);
        assert!(job.location.is_none());
        assert!(job.embedding.is_none());
    }
}
