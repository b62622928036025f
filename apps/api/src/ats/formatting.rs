//! File-level formatting checks: format, size, and how cleanly the text
//! survived extraction.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::analyzer::{FactorScore, FileMetadata};
use crate::models::profile::StructuredProfile;

const MB: u64 = 1024 * 1024;

static PAGE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*page\s+\d+(?:\s+of\s+\d+)?\s*$").expect("valid regex")
});

#[derive(Debug, PartialEq, Eq)]
enum FileFormat {
    Pdf,
    Word,
    Other,
    Unknown,
}

fn detect_format(file: &FileMetadata) -> FileFormat {
    if let Some(mime) = &file.mime_type {
        let mime = mime.to_lowercase();
        if mime.contains("pdf") {
            return FileFormat::Pdf;
        }
        if mime.contains("msword") || mime.contains("wordprocessingml") {
            return FileFormat::Word;
        }
        return FileFormat::Other;
    }
    if let Some(name) = &file.file_name {
        let name = name.to_lowercase();
        if name.ends_with(".pdf") {
            return FileFormat::Pdf;
        }
        if name.ends_with(".doc") || name.ends_with(".docx") {
            return FileFormat::Word;
        }
        return FileFormat::Other;
    }
    FileFormat::Unknown
}

pub fn analyze(resume: &StructuredProfile, file: Option<&FileMetadata>) -> FactorScore {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if let Some(file) = file {
        match detect_format(file) {
            FileFormat::Pdf | FileFormat::Unknown => {}
            FileFormat::Word => {
                score -= 5;
                issues.push("Word documents can lose layout during ATS text extraction".to_string());
                suggestions.push("Export the resume as a PDF".to_string());
            }
            FileFormat::Other => {
                score -= 15;
                issues.push("Unusual file format for a resume".to_string());
                suggestions.push("Use PDF, the most reliably parsed format".to_string());
            }
        }
        if let Some(size) = file.size_bytes {
            if size > 5 * MB {
                score -= 10;
                issues.push("File is larger than 5MB".to_string());
                suggestions.push("Compress embedded images or export a lighter file".to_string());
            } else if size > 2 * MB {
                score -= 5;
                issues.push("File is larger than 2MB".to_string());
            }
        }
    }

    let text = resume.raw_text.trim();
    if text.is_empty() {
        score -= 30;
        issues.push("No text could be extracted".to_string());
        suggestions.push("Avoid image-only or scanned documents".to_string());
    } else if text.len() < 500 {
        score -= 20;
        issues.push("Very little text was extracted".to_string());
    } else if text.len() < 1000 {
        score -= 10;
        issues.push("Less text than expected for a full resume".to_string());
    }

    if !text.is_empty() {
        let visible = text.chars().filter(|c| !c.is_whitespace()).count();
        let special = text
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_alphanumeric())
            .count();
        if visible > 0 && special as f64 / visible as f64 > 0.10 {
            score -= 15;
            issues.push("High ratio of special characters".to_string());
            suggestions.push("Remove decorative symbols and graphics".to_string());
        }

        if text.matches('|').count() > 10 {
            score -= 10;
            issues.push("Heavy table or column formatting detected".to_string());
            suggestions.push("Replace tables with plain bullet lists".to_string());
        }

        let repeated = header_footer_patterns(text);
        if repeated > 0 {
            score -= 5 * repeated as i32;
            issues.push("Running header or footer text detected".to_string());
            suggestions.push("Strip page numbers and repeated headers before upload".to_string());
        }
    }

    FactorScore {
        score: score.max(0) as u32,
        issues,
        suggestions,
    }
}

/// Counts header/footer artifacts: page-number lines and any non-bullet line
/// repeated three or more times (the shape a running header extracts as).
fn header_footer_patterns(text: &str) -> usize {
    let mut patterns = 0;
    if PAGE_NUMBER_RE.is_match(text) {
        patterns += 1;
    }

    let mut line_counts: HashMap<&str, usize> = HashMap::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.len() >= 8 && !crate::extraction::sections::is_bullet_line(line) {
            *line_counts.entry(trimmed).or_insert(0) += 1;
        }
    }
    if line_counts.values().any(|&n| n >= 3) {
        patterns += 1;
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume_with_text(text: &str) -> StructuredProfile {
        StructuredProfile {
            raw_text: text.to_string(),
            ..Default::default()
        }
    }

    fn long_clean_text() -> String {
        "Delivered resilient services for payments and reporting teams across two regions "
            .repeat(16)
    }

    #[test]
    fn test_oversized_pdf_loses_ten_points_only() {
        let file = FileMetadata {
            file_name: Some("resume.pdf".to_string()),
            mime_type: Some("application/pdf".to_string()),
            size_bytes: Some(6 * MB),
        };
        let factor = analyze(&resume_with_text(&long_clean_text()), Some(&file));
        assert_eq!(factor.score, 90);
        assert!(factor.issues.iter().any(|i| i.contains("5MB")));
    }

    #[test]
    fn test_word_document_penalized_less_than_unknown_format() {
        let resume = resume_with_text(&long_clean_text());
        let word = FileMetadata {
            file_name: Some("resume.docx".to_string()),
            mime_type: None,
            size_bytes: Some(MB),
        };
        let odd = FileMetadata {
            file_name: Some("resume.pages".to_string()),
            mime_type: None,
            size_bytes: Some(MB),
        };
        assert_eq!(analyze(&resume, Some(&word)).score, 95);
        assert_eq!(analyze(&resume, Some(&odd)).score, 85);
    }

    #[test]
    fn test_missing_text_is_the_heaviest_text_penalty() {
        let factor = analyze(&resume_with_text("  "), None);
        assert_eq!(factor.score, 70);
        assert!(factor.issues.iter().any(|i| i.contains("No text")));
    }

    #[test]
    fn test_short_text_tiers() {
        let short = "Short resume body. ".repeat(10);
        assert_eq!(analyze(&resume_with_text(&short), None).score, 80);
        let medium = "Medium length resume body text here. ".repeat(20);
        assert_eq!(analyze(&resume_with_text(&medium), None).score, 90);
    }

    #[test]
    fn test_pipe_heavy_text_flagged_as_table() {
        let mut text = long_clean_text();
        text.push_str("\n| a | b | c | d | e |\n| f | g | h | i | j |\n");
        let factor = analyze(&resume_with_text(&text), None);
        assert_eq!(factor.score, 90);
        assert!(factor.issues.iter().any(|i| i.contains("table")));
    }

    #[test]
    fn test_page_numbers_detected_as_footer() {
        let mut text = long_clean_text();
        text.push_str("\nPage 1 of 2\n");
        let factor = analyze(&resume_with_text(&text), None);
        assert_eq!(factor.score, 95);
    }
}
