use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process configuration loaded from environment variables.
/// Required values fail fast with a descriptive error before any network work starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub nuworks_cookie: String,
    pub openai_api_key: String,
    pub min_score: u32,
    pub response_path: PathBuf,
    pub good_jobs_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            nuworks_cookie: require_env("NUWORKS_COOKIE")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            min_score: std::env::var("MIN_SCORE")
                .unwrap_or_else(|_| "50".to_string())
                .parse::<u32>()
                .context("MIN_SCORE must be a non-negative integer")?,
            response_path: std::env::var("RESPONSE_FILE")
                .unwrap_or_else(|_| "response.json".to_string())
                .into(),
            good_jobs_path: std::env::var("GOOD_JOBS_FILE")
                .unwrap_or_else(|_| "good_jobs.json".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
