//! Logging configuration

mod env;

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level filter (e.g., "info", "debug,argcheck_validator=trace")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Colored output (ignored for JSON)
    pub ansi: bool,

    /// Include the event target in each line
    pub target: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable with colors and indentation
    Pretty,
    /// Compact single-line output
    Compact,
    /// Structured JSON output
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::Compact,
            ansi: true,
            target: false,
        }
    }
}
