//! Structural completeness: which sections exist, whether they actually say
//! anything, and whether they appear in the order screeners expect.

use super::analyzer::FactorScore;
use crate::extraction::sections::{self, SectionKind};
use crate::models::profile::StructuredProfile;

const CONTACT_POINTS: u32 = 15;
const EXPERIENCE_POINTS: u32 = 25;
const EDUCATION_POINTS: u32 = 15;
const SKILLS_POINTS: u32 = 15;
const PROJECTS_POINTS: u32 = 10;
const CERTIFICATIONS_POINTS: u32 = 10;
const AWARDS_POINTS: u32 = 5;
const VOLUNTEERING_POINTS: u32 = 5;
const SUMMARY_BONUS: u32 = 10;
const ORDER_BONUS: u32 = 10;

/// Skills lists below this size read as a placeholder, not a section.
const MIN_MEANINGFUL_SKILLS: usize = 3;

pub fn analyze(resume: &StructuredProfile) -> FactorScore {
    let mut score = 0u32;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    let personal = &resume.personal;
    if personal.name.is_some() || personal.email.is_some() || personal.phone.is_some() {
        score += CONTACT_POINTS;
    } else {
        issues.push("No contact details found".to_string());
        suggestions.push("Put name, email, and phone at the top".to_string());
    }

    let has_experience = resume
        .experience
        .iter()
        .any(|e| !e.position.trim().is_empty() || !e.description.trim().is_empty());
    if has_experience {
        score += EXPERIENCE_POINTS;
    } else {
        issues.push("No work experience section found".to_string());
        suggestions.push("Add an experience section with roles and dates".to_string());
    }

    let has_education = resume
        .education
        .iter()
        .any(|e| !e.degree.trim().is_empty() || !e.institution.trim().is_empty());
    if has_education {
        score += EDUCATION_POINTS;
    } else {
        issues.push("No education section found".to_string());
        suggestions.push("List degrees or relevant coursework".to_string());
    }

    let skill_count = resume.skills.technical.len() + resume.skills.soft.len();
    if skill_count >= MIN_MEANINGFUL_SKILLS {
        score += SKILLS_POINTS;
    } else if skill_count > 0 {
        issues.push("Skills section is too thin to register".to_string());
        suggestions.push("List the tools and technologies you work with".to_string());
    } else {
        issues.push("No skills section found".to_string());
        suggestions.push("Add a dedicated skills section".to_string());
    }

    if !resume.projects.is_empty() {
        score += PROJECTS_POINTS;
    }
    if !resume.skills.certifications.is_empty() {
        score += CERTIFICATIONS_POINTS;
    }
    if !resume.awards.is_empty() {
        score += AWARDS_POINTS;
    }
    if !resume.volunteering.is_empty() {
        score += VOLUNTEERING_POINTS;
    }

    let has_summary = personal
        .summary
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    if has_summary {
        score += SUMMARY_BONUS;
    } else {
        suggestions.push("Open with a short professional summary".to_string());
    }

    match ideal_order(&resume.raw_text) {
        Some(true) => score += ORDER_BONUS,
        Some(false) => {
            suggestions
                .push("Order sections summary, then experience, then education".to_string());
        }
        None => {}
    }

    FactorScore {
        score: score.min(100),
        issues,
        suggestions,
    }
}

/// Whether summary, experience, and education headings appear in that order.
/// None when any of the three headings is missing from the raw text.
pub(crate) fn ideal_order(raw_text: &str) -> Option<bool> {
    let map = sections::split_sections(raw_text);
    let summary = map.heading_offset(SectionKind::Summary)?;
    let experience = map.heading_offset(SectionKind::Experience)?;
    let education = map.heading_offset(SectionKind::Education)?;
    Some(summary < experience && experience < education)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Certification, EducationEntry, ExperienceEntry};

    fn full_resume() -> StructuredProfile {
        let mut resume = StructuredProfile {
            raw_text: "Summary\ntext\n\nExperience\ntext\n\nEducation\ntext\n".to_string(),
            ..Default::default()
        };
        resume.personal.name = Some("Dana Smith".to_string());
        resume.personal.email = Some("dana@example.com".to_string());
        resume.personal.summary = Some("Platform engineer focused on reliability".to_string());
        resume.experience.push(ExperienceEntry {
            position: "Engineer".to_string(),
            ..Default::default()
        });
        resume.education.push(EducationEntry {
            degree: "BS".to_string(),
            ..Default::default()
        });
        resume.skills.technical =
            vec!["rust".to_string(), "kafka".to_string(), "aws".to_string()];
        resume.skills.certifications.push(Certification {
            name: "Solutions Architect".to_string(),
            issuer: Some("AWS".to_string()),
        });
        resume
    }

    #[test]
    fn test_complete_resume_caps_at_hundred() {
        let mut resume = full_resume();
        resume.projects.push(Default::default());
        resume.awards.push(Default::default());
        resume.volunteering.push(Default::default());
        let factor = analyze(&resume);
        assert_eq!(factor.score, 100);
        assert!(factor.issues.is_empty());
    }

    #[test]
    fn test_essential_sections_and_bonuses_add_up() {
        // contact 15 + experience 25 + education 15 + skills 15
        // + certifications 10 + summary 10 + order 10
        let factor = analyze(&full_resume());
        assert_eq!(factor.score, 100);
    }

    #[test]
    fn test_missing_education_flagged() {
        let mut resume = full_resume();
        resume.education.clear();
        let factor = analyze(&resume);
        assert_eq!(factor.score, 85);
        assert!(factor.issues.iter().any(|i| i.contains("education")));
    }

    #[test]
    fn test_thin_skills_earn_nothing() {
        let mut resume = full_resume();
        resume.skills.technical = vec!["rust".to_string()];
        let factor = analyze(&resume);
        assert_eq!(factor.score, 85);
        assert!(factor.issues.iter().any(|i| i.contains("thin")));
    }

    #[test]
    fn test_out_of_order_sections_lose_bonus() {
        let mut resume = full_resume();
        resume.raw_text =
            "Education\ntext\n\nExperience\ntext\n\nSummary\ntext\n".to_string();
        let factor = analyze(&resume);
        assert_eq!(factor.score, 90);
        assert!(factor
            .suggestions
            .iter()
            .any(|s| s.contains("Order sections")));
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let factor = analyze(&StructuredProfile::default());
        assert_eq!(factor.score, 0);
        assert!(factor.issues.len() >= 4);
    }
}
