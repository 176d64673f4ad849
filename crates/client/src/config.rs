//! # Client Configuration Module
//!
//! Loads settings for the BedBet client from environment variables, with
//! defaults for everything except credentials.
//!
//! ## Environment Variables
//!
//! - `BEDBET_API_BASE`: Base URL of the REST server (default: "https://bedbet.knpu.re.kr/api")
//! - `BEDBET_TOKEN_PATH`: File the access token is kept in (default: memory only)
//! - `BEDBET_REQUEST_TIMEOUT_SECONDS`: HTTP timeout, must be positive (default: 30)
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::env;
use std::path::PathBuf;

use eyre::{eyre, Result};
use tracing::Level;

pub const DEFAULT_API_BASE: &str = "https://bedbet.knpu.re.kr/api";
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Configuration for the BedBet client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub api_base: String,

    /// Where the access token is persisted; `None` keeps it in memory
    pub token_path: Option<PathBuf>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Log level for the application
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token_path: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_level: Level::INFO,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("BEDBET_API_BASE")
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(eyre!("BEDBET_API_BASE must be an http(s) URL, got {:?}", api_base));
        }

        let token_path = lookup("BEDBET_TOKEN_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout = lookup("BEDBET_REQUEST_TIMEOUT_SECONDS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let log_level = match lookup("LOG_LEVEL").unwrap_or_default().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            api_base,
            token_path,
            request_timeout,
            log_level,
        })
    }

    /// Full URL of an endpoint path such as `/team/list`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
