//! CLI tool for libstralg.
//!
//! Command-line access to the substring search and edit distance
//! dispatchers, plus the integer helpers.

use anyhow::Result;
use clap::Parser;

use libstralg::cli::{execute, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    execute(Cli::parse())
}
