//! Sub-score weighting.

use serde::{Deserialize, Serialize};

/// Tolerance for the weight-sum check, absorbing float drift from env
/// overrides like `0.1 + 0.2`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Relative importance of the four match sub-scores. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchWeights {
    pub semantic: f64,
    pub skills: f64,
    pub experience: f64,
    pub keywords: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        MatchWeights {
            semantic: 0.40,
            skills: 0.25,
            experience: 0.20,
            keywords: 0.15,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.semantic + self.skills + self.experience + self.keywords
    }

    /// Rejects weight sets that cannot produce a sane 0-100 score. Run at
    /// startup so a bad override fails the boot, not the first request.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("semantic", self.semantic),
            ("skills", self.skills),
            ("experience", self.experience),
            ("keywords", self.keywords),
        ] {
            anyhow::ensure!(
                (0.0..=1.0).contains(&value),
                "{name} weight {value} is outside [0, 1]"
            );
        }
        let sum = self.sum();
        anyhow::ensure!(
            (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE,
            "weights sum to {sum}, expected 1.0"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_validate() {
        assert!(MatchWeights::default().validate().is_ok());
    }

    #[test]
    fn test_bad_sum_is_rejected() {
        let weights = MatchWeights {
            semantic: 0.5,
            skills: 0.5,
            experience: 0.5,
            keywords: 0.5,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let weights = MatchWeights {
            semantic: -0.1,
            skills: 0.5,
            experience: 0.4,
            keywords: 0.2,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_sum_within_tolerance_passes() {
        let weights = MatchWeights {
            semantic: 0.4,
            skills: 0.25,
            experience: 0.2,
            keywords: 0.15000000009,
        };
        assert!(weights.validate().is_ok());
    }
}
