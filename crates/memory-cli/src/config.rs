//! CLI configuration from environment variables.

use std::env;
use std::time::Duration;

use memory_core::DEFAULT_PAIR_COUNT;

#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Base URL of the result store, without trailing slash.
    pub server_url: String,
    pub pair_count: usize,
    /// How long a mismatched pair stays face up.
    pub flip_back_delay: Duration,
}

impl CliConfig {
    pub fn from_env() -> Self {
        let server_url = env::var("MEMORY_SERVER_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let pair_count = env::var("MEMORY_PAIRS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAIR_COUNT);

        let flip_back_ms = env::var("MEMORY_FLIP_BACK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            pair_count,
            flip_back_delay: Duration::from_millis(flip_back_ms),
        }
    }
}
