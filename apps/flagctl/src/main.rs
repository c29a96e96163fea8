mod args;

use crate::args::Cli;
use anyhow::Context;
use clap::Parser;
use flagpole_flags::{FlagsConfig, global};
use flagpole_logger::Logger;
use std::collections::BTreeMap;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).level(cli.log_level).init()?;

    let mut config = match &cli.config {
        Some(path) => {
            FlagsConfig::load(path).context("Critical: failed to load flag configuration")?
        },
        None => FlagsConfig::default(),
    };
    config.merge_process_env().context("Critical: invalid flag override in environment")?;
    config.merge(cli.overrides);

    let registry = global::global();
    config.apply(registry).context("Critical: feature flags were rejected")?;
    tracing::info!(configured = config.features.len(), "Feature flags resolved");

    print_flags(&registry.snapshot(), cli.json)
}

fn print_flags(flags: &BTreeMap<&'static str, bool>, json: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, flags)?;
        writeln!(out)?;
    } else {
        for (name, value) in flags {
            writeln!(out, "{name}\t{value}")?;
        }
    }
    Ok(())
}
