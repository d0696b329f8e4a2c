use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Every variable is optional; the AI writer stays off without an API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub app_env: String,
    pub cors_origins: Vec<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            app_name: env_or("APP_NAME", "Sunny Demo API"),
            app_env: env_or("APP_ENV", "development"),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173")),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            openai_model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Comma-separated origins, blanks dropped. Empty means "allow any".
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
