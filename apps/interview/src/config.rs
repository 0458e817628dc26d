use anyhow::{Context, Result};

/// Practice-session configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub role: String,
    pub difficulty: String,
    pub question_count: usize,
    /// Seeds the question shuffle for a reproducible session.
    pub shuffle_seed: Option<u64>,
    pub rust_log: String,
}

pub const DEFAULT_QUESTION_COUNT: usize = 5;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            role: require_env("INTERVIEW_ROLE")?,
            difficulty: require_env("INTERVIEW_DIFFICULTY")?,
            question_count: match std::env::var("INTERVIEW_QUESTION_COUNT") {
                Ok(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .context("INTERVIEW_QUESTION_COUNT must be a non-negative integer")?,
                Err(_) => DEFAULT_QUESTION_COUNT,
            },
            shuffle_seed: std::env::var("INTERVIEW_SHUFFLE_SEED")
                .ok()
                .map(|raw| raw.trim().parse::<u64>())
                .transpose()
                .context("INTERVIEW_SHUFFLE_SEED must be an unsigned 64-bit integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
