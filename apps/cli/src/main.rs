//! `argcheck`: validate argument lists against schema files.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(cli)?;
    argcheck_log::init(&settings.log).context("failed to initialize logging")?;
    tracing::debug!(?settings, "settings loaded");

    let registry = argcheck_validator::PredicateRegistry::with_builtins();
    match &cli.command {
        Command::Check(args) => commands::check::run(args, &registry),
        Command::Inspect(args) => commands::inspect::run(args, &registry),
        Command::Predicates => commands::predicates::run(&registry),
    }
}
