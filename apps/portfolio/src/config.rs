use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Url;

/// Client configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the portfolio API; endpoint paths are appended to it.
    pub api_base_url: Url,
    /// No timeout unless set.
    pub request_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    /// Loads configuration from the environment. Fails if `API_BASE_URL` is
    /// missing or not an absolute URL.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut config = Config::new(&require_env("API_BASE_URL")?)?;

        if let Ok(raw) = std::env::var("REQUEST_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;
            if secs == 0 {
                bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
            }
            config.request_timeout = Some(Duration::from_secs(secs));
        }
        config.rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(config)
    }

    pub fn new(api_base_url: &str) -> Result<Self> {
        let trimmed = api_base_url.trim();
        if trimmed.is_empty() {
            bail!("API base URL is empty");
        }
        let api_base_url = Url::parse(trimmed)
            .with_context(|| format!("API base URL '{trimmed}' is not a valid absolute URL"))?;
        if api_base_url.cannot_be_a_base() {
            bail!("API base URL '{trimmed}' cannot have paths appended");
        }

        Ok(Config {
            api_base_url,
            request_timeout: None,
            rust_log: "info".to_string(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
