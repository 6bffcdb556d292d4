//! Configuration module for the ChoreBoard domain core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated processing latency applied before an exchange commits.
    /// The mobile app showed a spinner for this long; 0 disables the delay.
    pub exchange_delay_ms: u64,
    /// Whether to preload the store with the demo catalog and feed
    pub seed_demo_data: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let exchange_delay_ms = env::var("CHOREBOARD_EXCHANGE_DELAY_MS")
            .unwrap_or_else(|_| "1500".to_string())
            .parse()
            .expect("Invalid CHOREBOARD_EXCHANGE_DELAY_MS format");

        let seed_demo_data = env::var("CHOREBOARD_SEED_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_level = env::var("CHOREBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            exchange_delay_ms,
            seed_demo_data,
            log_level,
        }
    }

    /// The exchange delay as a [`Duration`].
    pub fn exchange_delay(&self) -> Duration {
        Duration::from_millis(self.exchange_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exchange_delay_ms: 1500,
            seed_demo_data: false,
            log_level: "info".to_string(),
        }
    }
}
