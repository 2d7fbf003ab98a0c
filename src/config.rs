//! Runtime configuration from the environment
//!
//! A `.env` file in the working directory is loaded first if present.

use std::env;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Sampling temperature sent with every analysis request
pub const ANALYSIS_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// OpenAI-compatible chat completions endpoint
    pub gateway_url: String,
    /// Bearer key; analysis fails with `MissingApiKey` when absent
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_ms: u64,
    /// HTTP API bind address
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Read `GPTIQX_*` variables, falling back to defaults
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (used by `from_env` and tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            gateway_url: non_empty("GPTIQX_GATEWAY_URL").unwrap_or(defaults.gateway_url),
            api_key: non_empty("GPTIQX_API_KEY"),
            model: non_empty("GPTIQX_MODEL").unwrap_or(defaults.model),
            timeout_ms: non_empty("GPTIQX_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_ms),
            addr: non_empty("GPTIQX_ADDR").unwrap_or(defaults.addr),
        }
    }
}
