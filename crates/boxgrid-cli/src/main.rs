//! `boxgrid`: render CSV or JSON data as a border-drawn text table.

mod cli;
mod input;

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = read_source(&cli)?;
    let output = cli::run(&cli, &source)?;
    print!("{output}");
    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_source(cli: &Cli) -> Result<String> {
    match &cli.file {
        Some(path) if !cli.reads_stdin() => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read standard input")?;
            Ok(source)
        }
    }
}
