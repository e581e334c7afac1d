//! Configuration from environment variables

use super::{Config, Format};

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub(crate) fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Parse ARGCHECK_LOG or RUST_LOG
        if let Some(level) = lookup("ARGCHECK_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("ARGCHECK_LOG_FORMAT") {
            config.format = match format.to_lowercase().as_str() {
                "pretty" => Format::Pretty,
                "json" => Format::Json,
                _ => Format::Compact,
            };
        }

        // https://no-color.org
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.ansi = false;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(from(&[]), Config::default());
    }

    #[test]
    fn own_variable_wins_over_rust_log() {
        let config = from(&[("RUST_LOG", "info"), ("ARGCHECK_LOG", "trace")]);
        assert_eq!(config.level, "trace");
        assert_eq!(from(&[("RUST_LOG", "info")]).level, "info");
    }

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("JSON", Format::Json)]
    #[case("compact", Format::Compact)]
    #[case("logfmt", Format::Compact)]
    fn format_names(#[case] name: &str, #[case] expected: Format) {
        assert_eq!(from(&[("ARGCHECK_LOG_FORMAT", name)]).format, expected);
    }

    #[test]
    fn no_color_disables_ansi() {
        assert!(!from(&[("NO_COLOR", "1")]).ansi);
        assert!(from(&[("NO_COLOR", "")]).ansi);
    }
}
