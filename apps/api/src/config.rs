use anyhow::{bail, Context, Result};

use crate::matching::weights::MatchWeights;

/// Application configuration loaded from environment variables.
/// Every variable has a default; the service starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub embedding_api_url: Option<String>,
    pub embedding_api_key: Option<String>,
    pub rank_concurrency: usize,
    pub weights: MatchWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let rank_concurrency = std::env::var("RANK_CONCURRENCY")
            .unwrap_or_else(|_| "8".to_string())
            .parse::<usize>()
            .context("RANK_CONCURRENCY must be a positive integer")?;
        if rank_concurrency == 0 {
            bail!("RANK_CONCURRENCY must be at least 1");
        }

        let defaults = MatchWeights::default();
        let weights = MatchWeights {
            semantic: weight_env("MATCH_WEIGHT_SEMANTIC", defaults.semantic)?,
            skills: weight_env("MATCH_WEIGHT_SKILLS", defaults.skills)?,
            experience: weight_env("MATCH_WEIGHT_EXPERIENCE", defaults.experience)?,
            keywords: weight_env("MATCH_WEIGHT_KEYWORDS", defaults.keywords)?,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            embedding_api_url: std::env::var("EMBEDDING_API_URL").ok(),
            embedding_api_key: std::env::var("EMBEDDING_API_KEY").ok(),
            rank_concurrency,
            weights,
        })
    }
}

fn weight_env(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
