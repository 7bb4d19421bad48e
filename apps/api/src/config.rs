use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::fuzzy::DEFAULT_FUZZY_THRESHOLD;
use crate::matching::keywords::DEFAULT_TOP_N;
use crate::matching::{PipelineSettings, ScoringMode};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_MB: usize = 25;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scoring_mode: ScoringMode,
    pub top_n_keywords: usize,
    pub fuzzy_threshold: f64,
    pub max_upload_mb: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring_mode: std::env::var("SCORING_MODE")
                .ok()
                .map(|v| ScoringMode::from_str(&v))
                .transpose()
                .map_err(anyhow::Error::msg)
                .context("SCORING_MODE must be 'keyword' or 'cosine'")?
                .unwrap_or_default(),
            top_n_keywords: parse_env("TOP_N_KEYWORDS", DEFAULT_TOP_N)?,
            fuzzy_threshold: parse_env("FUZZY_THRESHOLD", DEFAULT_FUZZY_THRESHOLD)?,
            max_upload_mb: parse_env("MAX_UPLOAD_MB", DEFAULT_MAX_UPLOAD_MB)?,
        })
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            scoring_mode: self.scoring_mode,
            top_n: self.top_n_keywords,
            fuzzy_threshold: self.fuzzy_threshold,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            scoring_mode: ScoringMode::default(),
            top_n_keywords: DEFAULT_TOP_N,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
