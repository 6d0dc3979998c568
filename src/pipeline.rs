//! End-to-end trend pipeline: dedupe, cluster, score, summarize, render.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::article::Article;
use crate::clustering::{cluster_articles, ArticleCluster, DEFAULT_DISTANCE_THRESHOLD};
use crate::dedupe::dedupe_articles;
use crate::scoring::{score_clusters, ScoredCluster, ScoringWeights};
use crate::summary::{
    render_text_report, summarize_clusters, TrendSummary, DEFAULT_MAX_TRENDS,
    DEFAULT_MAX_URLS_PER_TREND,
};
use crate::TARGET_PIPELINE;

/// Tunables for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub distance_threshold: f64,
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "deserialize_weight_overrides")]
    pub weights: ScoringWeights,
    pub max_trends: usize,
    pub max_urls_per_trend: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            keywords: Vec::new(),
            weights: ScoringWeights::default(),
            max_trends: DEFAULT_MAX_TRENDS,
            max_urls_per_trend: DEFAULT_MAX_URLS_PER_TREND,
        }
    }
}

/// Reads `weights` as named overrides layered over the default weights.
fn deserialize_weight_overrides<'de, D>(deserializer: D) -> Result<ScoringWeights, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<String, f64>::deserialize(deserializer)?;
    Ok(ScoringWeights::default().with_overrides(&overrides))
}

/// Every intermediate result of a run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub unique: Vec<Article>,
    pub duplicates: Vec<Article>,
    pub clusters: Vec<ArticleCluster>,
    pub scored: Vec<ScoredCluster>,
    pub summaries: Vec<TrendSummary>,
    pub report: String,
}

/// Runs all stages over one batch of articles
///
/// # Arguments
/// * `articles` - Raw articles in fetch order
/// * `config` - Stage parameters
/// * `now` - Reference time for recency; `None` uses the current UTC time
pub fn run_pipeline(
    articles: &[Article],
    config: &PipelineConfig,
    now: Option<NaiveDateTime>,
) -> PipelineRun {
    let (unique, duplicates) = dedupe_articles(articles);
    info!(
        target: TARGET_PIPELINE,
        "{} unique, {} duplicates removed",
        unique.len(),
        duplicates.len()
    );

    let clusters = cluster_articles(&unique, config.distance_threshold);
    info!(target: TARGET_PIPELINE, "{} clusters formed", clusters.len());

    let scored = score_clusters(&clusters, &config.keywords, now, &config.weights);
    info!(target: TARGET_PIPELINE, "{} clusters scored", scored.len());

    let summaries = summarize_clusters(&scored, config.max_trends, config.max_urls_per_trend);
    info!(target: TARGET_PIPELINE, "{} trends summarized", summaries.len());

    let report = render_text_report(&summaries);

    PipelineRun {
        unique,
        duplicates,
        clusters,
        scored,
        summaries,
        report,
    }
}
