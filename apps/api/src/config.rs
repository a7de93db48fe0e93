use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Allowed CORS origin. `None` means any origin.
    pub client_origin: Option<String>,
    pub rust_log: String,
    pub resume_fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("API_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("API_PORT/PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let resume_fetch_timeout_secs = match get("RESUME_FETCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("RESUME_FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        Ok(Config {
            port,
            client_origin: get("CLIENT_ORIGIN").filter(|origin| origin != "*"),
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            resume_fetch_timeout_secs,
        })
    }
}
