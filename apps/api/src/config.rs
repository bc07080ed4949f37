use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::ANTHROPIC_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// `None` when `ANTHROPIC_API_KEY` is unset: AI fit scoring falls back to
    /// keywords and extraction answers with an error.
    pub llm: Option<LlmConfig>,
    pub fetch: FetchConfig,
    pub extract: ExtractConfig,
}

/// Credentials and endpoint for the LLM client.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
}

/// Outbound page-fetch settings for the posting extractor.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            max_redirects: 5,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Reduce the page to job-relevant sections before prompting.
    pub prefilter: bool,
    /// Character budget for page content sent to the LLM.
    pub max_chars: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            prefilter: true,
            max_chars: 12_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm = optional_env("ANTHROPIC_API_KEY").map(|api_key| LlmConfig {
            api_key,
            api_url: optional_env("ANTHROPIC_API_URL")
                .unwrap_or_else(|| ANTHROPIC_API_URL.to_string()),
        });

        let fetch_defaults = FetchConfig::default();
        let fetch = FetchConfig {
            timeout: Duration::from_secs(parse_env(
                "FETCH_TIMEOUT_SECS",
                fetch_defaults.timeout.as_secs(),
            )?),
            max_redirects: parse_env("FETCH_MAX_REDIRECTS", fetch_defaults.max_redirects)?,
            user_agent: optional_env("FETCH_USER_AGENT").unwrap_or(fetch_defaults.user_agent),
        };

        let extract_defaults = ExtractConfig::default();
        let extract = ExtractConfig {
            prefilter: parse_env("EXTRACT_PREFILTER", extract_defaults.prefilter)?,
            max_chars: parse_env("EXTRACT_MAX_CHARS", extract_defaults.max_chars)?,
        };

        Ok(Config {
            port: parse_env("PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm,
            fetch,
            extract,
        })
    }
}

/// Reads a variable, treating unset and blank as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
