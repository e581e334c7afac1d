//! Layered settings: defaults → `argcheck.toml` (or `--config`) → `ARGCHECK_*` env → flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use argcheck_log::Config as LogConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

const DEFAULT_FILE: &str = "argcheck.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: LogConfig,
}

impl Settings {
    /// Provider chain without command-line overrides.
    ///
    /// `ARGCHECK_LOG__LEVEL` maps to `log.level`. The flat `ARGCHECK_LOG` and
    /// `ARGCHECK_LOG_FORMAT` variables already feed the defaults.
    pub fn figment(file: Option<&Path>) -> anyhow::Result<Figment> {
        let defaults = Self {
            log: LogConfig::from_env(),
        };
        let mut figment = Figment::from(Serialized::defaults(defaults));

        match file {
            Some(path) if !path.exists() => bail!("settings file {} not found", path.display()),
            Some(path) => figment = figment.merge(Toml::file(path)),
            None if Path::new(DEFAULT_FILE).exists() => {
                figment = figment.merge(Toml::file(PathBuf::from(DEFAULT_FILE)));
            }
            None => {}
        }

        Ok(figment.merge(
            Env::prefixed("ARGCHECK_")
                .ignore(&["log", "log_format", "config"])
                .split("__"),
        ))
    }

    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut settings: Self = Self::figment(cli.config.as_deref())?
            .extract()
            .context("invalid settings")?;
        if let Some(level) = &cli.log_level {
            settings.log.level.clone_from(level);
        }
        Ok(settings)
    }
}
