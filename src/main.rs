//! contact-intervals: Main entry point

use anyhow::Context;
use clap::Parser;
use contact_intervals::cli::Cli;
use contact_intervals::pipeline::ContactPipeline;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the interval listing, so logs go to stderr
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let pipeline = ContactPipeline::new(cli.config()?);

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open input file {}", path.display())
        })?)),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?),
        None => Box::new(io::stdout().lock()),
    };

    pipeline.run(input, output)?;
    Ok(())
}
