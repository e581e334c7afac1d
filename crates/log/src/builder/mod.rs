//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::core::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parses the configured level into a filter.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {e}", self.config.level)))
    }

    /// Build and install the global subscriber
    ///
    /// Events go to stderr so that command output on stdout stays clean.
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let registry = Registry::default().with(filter);
        let Config { ansi, target, .. } = self.config;

        let result = match self.config.format {
            Format::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_ansi(ansi)
                        .with_target(target)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            Format::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_ansi(ansi)
                        .with_target(target)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
            Format::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(target)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| LogError::Init(e.to_string()))?;
        tracing::debug!(level = %self.config.level, format = ?self.config.format, "logger initialized");
        Ok(())
    }
}
