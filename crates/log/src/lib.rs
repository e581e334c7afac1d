//! # argcheck-log
//!
//! Subscriber setup for the `argcheck` binaries.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once at
//! startup with a [`Config`] (usually deserialized from their own settings).
//!
//! ```rust,ignore
//! let config = argcheck_log::Config::from_env();
//! argcheck_log::init(&config)?;
//! tracing::info!("ready");
//! ```

mod builder;
mod config;
mod core;

pub use builder::LoggerBuilder;
pub use config::{Config, Format};
pub use crate::core::{LogError, LogResult};

/// Installs the global subscriber described by `config`.
pub fn init(config: &Config) -> LogResult<()> {
    LoggerBuilder::from_config(config.clone()).build()
}
