use std::time::Duration;

use crate::organizer::DEFAULT_MODEL;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL URL. `None` runs on in-process stores.
    pub database_url: Option<String>,
    pub bind_addr: String,
    /// Cookie key material; must be at least 64 bytes to be used.
    pub session_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub http_timeout: Duration,
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {e}");
        }

        let http_timeout = match non_empty("HTTP_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(_) => {
                log::warn!("Invalid HTTP_TIMEOUT_SECS, using {DEFAULT_HTTP_TIMEOUT_SECS}s");
                Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Self {
            database_url: non_empty("DATABASE_URL"),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            session_key: non_empty("SESSION_KEY"),
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            http_timeout,
        }
    }
}
