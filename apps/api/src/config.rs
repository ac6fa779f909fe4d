use anyhow::{Context, Result};

/// Default number of career suggestions per report session.
pub const DEFAULT_SUGGESTION_TARGET: usize = 10;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Assistant the report runs are bound to. Created once in the OpenAI
    /// dashboard and referenced by id everywhere.
    pub assistant_id: String,
    pub suggestion_target: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            assistant_id: require_env("CAREER_ASSISTANT_ID")?,
            suggestion_target: std::env::var("SUGGESTION_TARGET")
                .unwrap_or_else(|_| DEFAULT_SUGGESTION_TARGET.to_string())
                .parse::<usize>()
                .context("SUGGESTION_TARGET must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
