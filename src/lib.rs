//! ChoreBoard Domain Core
//!
//! The rule-bearing slice of the ChoreBoard household chore app: the
//! community feed (filtering, publishing, likes and comments) and the points
//! mall (exchange validation and ledger, plus exchange history). The mobile
//! screens drive it through plain calls and render whatever it returns; there
//! is no server, persistence or authentication in this layer.

pub mod config;
pub mod errors;
pub mod feed;
pub mod mall;
pub mod models;
pub mod seed;
pub mod store;

pub use config::Config;
pub use errors::AppError;
pub use store::{InitialState, Store};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for the hosting process.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the configured level.
/// Call once at startup.
pub fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("ChoreBoard domain core initialized");
}

#[cfg(test)]
mod tests;
