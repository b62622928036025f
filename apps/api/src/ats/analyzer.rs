//! ATS compatibility grading: four independent factor analyzers combined
//! into one weighted score.

use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::profile::StructuredProfile;
use crate::vocab::Vocabulary;

use super::{formatting, keywords, readability, structure};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// What the upload pipeline knows about the original file. Everything is
/// optional; analysis degrades to text-only checks without it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileMetadata {
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub size_bytes: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtsWeights {
    pub formatting: f64,
    pub keywords: f64,
    pub structure: f64,
    pub readability: f64,
}

impl Default for AtsWeights {
    fn default() -> Self {
        AtsWeights {
            formatting: 0.25,
            keywords: 0.30,
            structure: 0.25,
            readability: 0.20,
        }
    }
}

impl AtsWeights {
    pub fn sum(&self) -> f64 {
        self.formatting + self.keywords + self.structure + self.readability
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("formatting", self.formatting),
            ("keywords", self.keywords),
            ("structure", self.structure),
            ("readability", self.readability),
        ] {
            ensure!(
                (0.0..=1.0).contains(&value),
                "ATS weight '{name}' must be within [0, 1], got {value}"
            );
        }
        let sum = self.sum();
        ensure!(
            (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE,
            "ATS weights must sum to 1.0, got {sum}"
        );
        Ok(())
    }
}

/// One factor's verdict: a 0-100 score plus what dragged it down and what
/// to do about it.
#[derive(Debug, Clone, Serialize)]
pub struct FactorScore {
    pub score: u32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsFactors {
    pub formatting: FactorScore,
    pub keywords: FactorScore,
    pub structure: FactorScore,
    pub readability: FactorScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    pub score: u32,
    pub factors: AtsFactors,
}

pub struct AtsAnalyzer {
    weights: AtsWeights,
    vocab: Arc<Vocabulary>,
}

impl AtsAnalyzer {
    pub fn new(vocab: Arc<Vocabulary>) -> anyhow::Result<Self> {
        Self::with_weights(AtsWeights::default(), vocab)
    }

    pub fn with_weights(weights: AtsWeights, vocab: Arc<Vocabulary>) -> anyhow::Result<Self> {
        weights.validate()?;
        Ok(AtsAnalyzer { weights, vocab })
    }

    pub fn analyze(&self, resume: &StructuredProfile, file: Option<&FileMetadata>) -> AtsReport {
        let factors = AtsFactors {
            formatting: formatting::analyze(resume, file),
            keywords: keywords::analyze(resume, &self.vocab),
            structure: structure::analyze(resume),
            readability: readability::analyze(resume, &self.vocab),
        };
        let score = (self.weights.formatting * f64::from(factors.formatting.score)
            + self.weights.keywords * f64::from(factors.keywords.score)
            + self.weights.structure * f64::from(factors.structure.score)
            + self.weights.readability * f64::from(factors.readability.score))
        .round()
        .clamp(0.0, 100.0) as u32;
        AtsReport { score, factors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(AtsWeights::default().validate().is_ok());
        assert!((AtsWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_off_by_more_than_tolerance_rejected() {
        let weights = AtsWeights {
            formatting: 0.30,
            keywords: 0.30,
            structure: 0.25,
            readability: 0.20,
        };
        assert!(weights.validate().is_err());
        assert!(AtsAnalyzer::with_weights(weights, Arc::new(Vocabulary::default())).is_err());
    }

    #[test]
    fn test_overall_is_weighted_sum_of_factors() {
        let analyzer = AtsAnalyzer::new(Arc::new(Vocabulary::default())).expect("default weights");
        let resume = StructuredProfile {
            raw_text: "Led migration to a new platform. Improved performance by 40%.".to_string(),
            ..Default::default()
        };
        let report = analyzer.analyze(&resume, None);
        let weights = AtsWeights::default();
        let expected = (weights.formatting * f64::from(report.factors.formatting.score)
            + weights.keywords * f64::from(report.factors.keywords.score)
            + weights.structure * f64::from(report.factors.structure.score)
            + weights.readability * f64::from(report.factors.readability.score))
        .round() as u32;
        assert_eq!(report.score, expected);
    }
}
