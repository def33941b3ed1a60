//! The index generation pipeline.
//!
//! Runs strictly top to bottom: enumerate charts, scan each chart's
//! entries, split front-matter, build records, write the chart's JSON
//! files. The first fatal error aborts the run; charts written before it
//! keep their output, charts after it are never touched.

use crate::config::GeneratorConfig;
use crate::matter::{JsonMap, split_front_matter};
use crate::record::{IndexRecord, full_record};
use crate::scan::{list_charts, list_entries};
use crate::utils::count_noun;
use crate::{debug, log};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Per-chart output filenames.
const INDEX_FILE: &str = "entries-index.json";
const FULL_FILE: &str = "entries-full.json";

/// Counts reported after a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Charts whose output files were written.
    pub charts: usize,
    /// Charts skipped for lack of an `entries` directory.
    pub skipped: usize,
    /// Entry files scanned across all written charts.
    pub entries: usize,
}

/// Run the whole pipeline against a resolved configuration.
pub fn run(config: &GeneratorConfig) -> Result<RunSummary> {
    let charts_path = config.charts_path();

    log!("index"; "generating entry indexes");
    log!("index"; "content root: {}", config.root.display());

    let charts = list_charts(&charts_path)?;
    log!("index"; "found {}: {}", count_noun(charts.len(), "chart", "charts"), charts.join(", "));

    let mut summary = RunSummary::default();
    for chart_id in &charts {
        let chart_dir = charts_path.join(chart_id);

        let Some(files) = list_entries(&chart_dir)? else {
            log!("skip"; "chart '{}' has no entries directory", chart_id);
            summary.skipped += 1;
            continue;
        };
        log!("index"; "chart '{}': {}", chart_id, count_noun(files.len(), "entry", "entries"));

        let mut index_records = Vec::with_capacity(files.len());
        let mut full_records = Vec::with_capacity(files.len());
        for filename in &files {
            let file_path = chart_dir.join("entries").join(filename);
            let text = fs::read_to_string(&file_path)
                .with_context(|| format!("cannot read entry `{}`", file_path.display()))?;
            let (meta, body) = split_front_matter(&text)
                .with_context(|| format!("bad front-matter in `{}`", file_path.display()))?;

            index_records.push(IndexRecord::build(&meta, body, chart_id, filename));
            full_records.push(full_record(&meta, body));
            debug!("index"; "scanned {}", file_path.display());
        }

        write_chart(&chart_dir, &index_records, &full_records)?;
        summary.charts += 1;
        summary.entries += files.len();
    }

    log!(
        "index";
        "all indexes generated: {} across {}, {} skipped",
        count_noun(summary.entries, "entry", "entries"),
        count_noun(summary.charts, "chart", "charts"),
        summary.skipped
    );
    Ok(summary)
}

/// Write both output files for one chart, then log the paths.
fn write_chart(chart_dir: &Path, index: &[IndexRecord], full: &[JsonMap]) -> Result<()> {
    let index_path = chart_dir.join(INDEX_FILE);
    write_json(&index_path, index)?;
    log!("write"; "saved {}", index_path.display());

    let full_path = chart_dir.join(FULL_FILE);
    write_json(&full_path, full)?;
    log!("write"; "saved {}", full_path.display());
    Ok(())
}

/// Pretty-printed JSON (2-space indent, no trailing newline), fully
/// replacing any previous file. Not atomic: a crash mid-write can leave a
/// truncated file.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("cannot write `{}`", path.display()))
}
