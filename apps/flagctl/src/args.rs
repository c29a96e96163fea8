//! # CLI Argument Definitions

use clap::Parser;
use flagpole_flags::config::parse_override;
use flagpole_logger::LevelFilter;
use std::path::PathBuf;

/// Resolves the service's feature flags and prints their effective values.
#[derive(Debug, Parser)]
#[command(name = "flagctl")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve feature flags from a config file and overrides")]
pub(crate) struct Cli {
    /// JSON config file carrying a `features` section
    #[arg(short, long, env = "FLAGPOLE_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Override a flag, `NAME` or `NAME=BOOL` (repeatable, applied after the file and environment)
    #[arg(short = 's', long = "set", value_name = "NAME[=BOOL]", value_parser = parse_override)]
    pub(crate) overrides: Vec<(String, bool)>,

    /// Print the resolved flags as a JSON object
    #[arg(long)]
    pub(crate) json: bool,

    /// Minimum level for diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    pub(crate) log_level: LevelFilter,
}
