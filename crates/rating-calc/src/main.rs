//! Rating Calc - the federation's educational rating calculator.
//!
//! Prints a JSON report for each command on stdout. Logs go to stderr and
//! are filtered with `RUST_LOG`.

use anyhow::Context as _;
use clap::Parser;
use rating_calc::cli::Cli;
use rating_calc::commands::{self, Context};
use rating_calc::config::CalcConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = CalcConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let ctx = Context::new(&config, cli.as_of);
    tracing::debug!(command = ?cli.command, as_of = ?ctx.as_of, "running command");

    let report = commands::run(&cli.command, &ctx)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
