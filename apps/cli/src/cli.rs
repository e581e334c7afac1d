//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

/// Validate argument lists against declarative schema files.
#[derive(Debug, Parser)]
#[command(name = "argcheck", version, about)]
pub struct Cli {
    /// Settings file (defaults to `argcheck.toml` in the current directory)
    #[arg(long, global = true, value_name = "FILE", env = "ARGCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,argcheck_validator=trace`
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate and bind one argument list
    Check(CheckArgs),
    /// Print a schema file's parameters and constraints
    Inspect(InspectArgs),
    /// List the predicates schema files may refer to
    Predicates,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Schema file (`.toml` or `.json`)
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,

    /// Positional argument; parsed as JSON, otherwise taken as a string
    #[arg(long = "arg", value_name = "VALUE", value_parser = parse_value)]
    pub args: Vec<Value>,

    /// Named argument
    #[arg(long = "kwarg", value_name = "NAME=VALUE", value_parser = parse_kwarg)]
    pub kwargs: Vec<(String, Value)>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Schema file (`.toml` or `.json`)
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,
}

/// `2` is a number, `[1, 2]` an array, `chrX` a string.
#[allow(clippy::unnecessary_wraps)]
fn parse_value(raw: &str) -> Result<Value, String> {
    Ok(serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned())))
}

fn parse_kwarg(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("missing name in `{raw}`"));
    }
    Ok((name.to_owned(), parse_value(value)?))
}
