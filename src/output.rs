//! Writes pipeline snapshots to disk.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::pipeline::PipelineRun;
use crate::snapshot::{ClusterSnapshot, ScoredClusterSnapshot, TrendSummarySnapshot};
use crate::TARGET_PIPELINE;

pub const DEDUPED_FILE: &str = "2_deduped.jsonl";
pub const CLUSTERS_FILE: &str = "3_clusters.json";
pub const SCORED_FILE: &str = "4_scored.json";
pub const REPORT_FILE: &str = "5_summary.txt";
pub const SUMMARY_FILE: &str = "5_summary.json";

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write every stage snapshot of `run` into `dir`, creating it if needed.
pub fn write_snapshots(dir: &Path, run: &PipelineRun) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut deduped = String::new();
    for article in &run.unique {
        deduped.push_str(&serde_json::to_string(article).context("Failed to serialize article")?);
        deduped.push('\n');
    }
    let deduped_path = dir.join(DEDUPED_FILE);
    fs::write(&deduped_path, deduped)
        .with_context(|| format!("Failed to write {}", deduped_path.display()))?;

    let clusters: Vec<ClusterSnapshot> = run.clusters.iter().map(ClusterSnapshot::from).collect();
    write_json(&dir.join(CLUSTERS_FILE), &clusters)?;

    let scored: Vec<ScoredClusterSnapshot> =
        run.scored.iter().map(ScoredClusterSnapshot::from).collect();
    write_json(&dir.join(SCORED_FILE), &scored)?;

    let report_path = dir.join(REPORT_FILE);
    fs::write(&report_path, &run.report)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    let summaries: Vec<TrendSummarySnapshot> =
        run.summaries.iter().map(TrendSummarySnapshot::from).collect();
    write_json(&dir.join(SUMMARY_FILE), &summaries)?;

    info!(target: TARGET_PIPELINE, "Wrote snapshots to {}", dir.display());
    Ok(())
}
