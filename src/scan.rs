//! Chart and entry discovery.
//!
//! Charts are the immediate subdirectories of the charts root; entries are
//! the `.md` files inside a chart's `entries` directory. Both listings keep
//! the order the filesystem reports, nothing is sorted.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Immediate subdirectories of the charts root, in listing order.
///
/// A missing or unreadable charts root fails the whole run, there is no
/// partial output for it.
pub fn list_charts(charts_path: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(charts_path)
        .with_context(|| format!("cannot read charts root `{}`", charts_path.display()))?;

    let mut charts = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("cannot list `{}`", charts_path.display()))?;
        if entry.file_type()?.is_dir() {
            charts.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(charts)
}

/// `.md` files inside a chart's `entries` directory, in listing order.
///
/// Returns `None` when the chart has no `entries` directory; the caller
/// logs the skip and moves on.
pub fn list_entries(chart_dir: &Path) -> Result<Option<Vec<String>>> {
    let entries_dir = chart_dir.join("entries");
    if !entries_dir.is_dir() {
        return Ok(None);
    }

    let listing = fs::read_dir(&entries_dir)
        .with_context(|| format!("cannot read `{}`", entries_dir.display()))?;

    let mut files = Vec::new();
    for entry in listing {
        let entry = entry.with_context(|| format!("cannot list `{}`", entries_dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".md") && entry.file_type()?.is_file() {
            files.push(name);
        }
    }
    Ok(Some(files))
}
