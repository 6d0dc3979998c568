//! Cluster scoring and ranking.
//!
//! Each cluster gets five raw signals (keyword relevance, size, source
//! diversity, recency, geographic spread). Every signal is min-max normalized
//! across the batch and the composite score is the weighted sum.

pub mod signals;
pub mod types;
pub mod weights;

use chrono::{NaiveDateTime, Utc};
use std::cmp::Ordering;
use tracing::debug;

pub use self::signals::{compute_raw_signals, min_max_normalize, RawSignals};
pub use self::types::{ScoredCluster, Signal, SignalValues};
pub use self::weights::ScoringWeights;
use crate::clustering::ArticleCluster;
use crate::TARGET_PIPELINE;

/// Scores and ranks clusters by composite trend importance
///
/// # Arguments
/// * `clusters` - Clusters to score
/// * `keywords` - Keywords for the relevance signal; empty means every title is relevant
/// * `now` - Reference time for recency, defaults to the current UTC time
/// * `weights` - Per-signal weights
///
/// # Returns
/// * `Vec<ScoredCluster>` - Sorted by score descending; equal scores keep input order
pub fn score_clusters(
    clusters: &[ArticleCluster],
    keywords: &[String],
    now: Option<NaiveDateTime>,
    weights: &ScoringWeights,
) -> Vec<ScoredCluster> {
    if clusters.is_empty() {
        return Vec::new();
    }
    let now = now.unwrap_or_else(|| Utc::now().naive_utc());

    let raw: Vec<RawSignals> = clusters
        .iter()
        .map(|c| compute_raw_signals(c, now, keywords))
        .collect();

    let column = |f: fn(&RawSignals) -> f64| raw.iter().map(f).collect::<Vec<f64>>();
    let relevance = min_max_normalize(&column(|r| r.keyword_relevance), false);
    let sizes = min_max_normalize(&column(|r| r.cluster_size), false);
    let diversity = min_max_normalize(&column(|r| r.source_diversity), false);
    let recency = min_max_normalize(&column(|r| r.recency_hours), true);
    let geo = min_max_normalize(&column(|r| r.geo_spread), false);

    let mut scored: Vec<ScoredCluster> = clusters
        .iter()
        .enumerate()
        .map(|(i, cluster)| {
            let signals = SignalValues {
                keyword_relevance: relevance[i],
                cluster_size: sizes[i],
                source_diversity: diversity[i],
                recency: recency[i],
                geo_spread: geo[i],
            };
            let score: f64 = signals.iter().map(|(s, v)| v * weights.get(s)).sum();
            ScoredCluster {
                cluster: cluster.clone(),
                score,
                signals,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug!(
        target: TARGET_PIPELINE,
        "Scored {} clusters (top score={:.4} of {:.4} reachable)",
        scored.len(),
        scored.first().map_or(0.0, |s| s.score),
        weights.total()
    );
    scored
}
