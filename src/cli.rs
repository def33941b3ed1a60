//! Command-line interface definitions.

use clap::builder::TypedValueParser as _;
use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Iceberg chart entry index generator.
///
/// Scans `<root>/content/iceberg-charts/<chart>/entries/*.md` and writes
/// `entries-index.json` and `entries-full.json` into each chart directory.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Content repository root (falls back to a built-in development path)
    ///
    /// An empty value counts as unset, so `CONTENT_REPO_PATH=""` still
    /// resolves to the default. The OsString parser is what lets the empty
    /// value through to `GeneratorConfig::resolve`.
    #[arg(
        short,
        long,
        env = "CONTENT_REPO_PATH",
        value_hint = clap::ValueHint::DirPath,
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub root: Option<PathBuf>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
