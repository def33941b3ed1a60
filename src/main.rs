//! iceberg-index - entry index generator for iceberg chart content repos.

mod cli;
mod config;
mod generate;
mod logger;
mod matter;
mod record;
mod scan;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::GeneratorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Resolve the content root once, at the boundary; nothing below
    // reads ambient environment state.
    let config = GeneratorConfig::resolve(&cli);

    generate::run(&config).map(|_| ())
}
