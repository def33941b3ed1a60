//! Content path resolution.
//!
//! The repository root is resolved exactly once, at startup: the `--root`
//! flag wins, then the `CONTENT_REPO_PATH` environment variable (clap folds
//! it into the flag), then [`DEFAULT_CONTENT_ROOT`]. Everything downstream
//! receives a [`GeneratorConfig`] and never touches ambient state.

use crate::cli::Cli;
use std::path::PathBuf;

/// Fallback root when neither `--root` nor `CONTENT_REPO_PATH` is set.
/// A local development convenience, not a deployment path.
pub const DEFAULT_CONTENT_ROOT: &str = "../aaaiceberg-content";

/// Repo-relative directory holding one subdirectory per chart.
pub const CHARTS_SUBDIR: &str = "content/iceberg-charts";

/// Resolved paths for one generator run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Content repository root. Existence is only checked when the charts
    /// root is first listed.
    pub root: PathBuf,
}

impl GeneratorConfig {
    pub fn resolve(cli: &Cli) -> Self {
        // An empty root (e.g. CONTENT_REPO_PATH="") counts as unset.
        let root = cli
            .root
            .clone()
            .filter(|root| !root.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_ROOT));
        Self { root }
    }

    /// `<root>/content/iceberg-charts`
    pub fn charts_path(&self) -> PathBuf {
        self.root.join(CHARTS_SUBDIR)
    }
}
