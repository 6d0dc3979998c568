//! Serializable views of pipeline results for presentation and delivery.
//!
//! Scores and signal values are rounded to four decimals here and nowhere
//! else; the in-memory types keep full precision.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::article::Article;
use crate::clustering::ArticleCluster;
use crate::scoring::ScoredCluster;
use crate::summary::TrendSummary;

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    pub cluster_id: usize,
    pub label: String,
    pub size: usize,
    pub articles: Vec<Article>,
}

impl From<&ArticleCluster> for ClusterSnapshot {
    fn from(cluster: &ArticleCluster) -> Self {
        Self {
            cluster_id: cluster.cluster_id,
            label: cluster.label().to_string(),
            size: cluster.size(),
            articles: cluster.articles.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredClusterSnapshot {
    pub cluster_id: usize,
    pub label: String,
    pub size: usize,
    pub score: f64,
    pub signals: BTreeMap<String, f64>,
    pub articles: Vec<Article>,
}

impl From<&ScoredCluster> for ScoredClusterSnapshot {
    fn from(scored: &ScoredCluster) -> Self {
        let cluster = ClusterSnapshot::from(&scored.cluster);
        Self {
            cluster_id: cluster.cluster_id,
            label: cluster.label,
            size: cluster.size,
            score: round4(scored.score),
            signals: scored
                .signals
                .iter()
                .map(|(signal, value)| (signal.name().to_string(), round4(value)))
                .collect(),
            articles: cluster.articles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummarySnapshot {
    pub rank: usize,
    pub headline: String,
    pub score: f64,
    pub article_count: usize,
    pub source_count: usize,
    pub countries: Vec<String>,
    pub date_range: String,
    pub top_urls: Vec<String>,
}

impl From<&TrendSummary> for TrendSummarySnapshot {
    fn from(summary: &TrendSummary) -> Self {
        Self {
            rank: summary.rank,
            headline: summary.headline.clone(),
            score: round4(summary.score),
            article_count: summary.article_count,
            source_count: summary.source_count,
            countries: summary.countries.clone(),
            date_range: summary.date_range.clone(),
            top_urls: summary.top_urls.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SignalValues;
    use serde_json::json;

    #[test]
    fn test_scored_snapshot_rounds_at_boundary() {
        let scored = ScoredCluster {
            cluster: ArticleCluster::new(2, vec![Article::new("https://a.com/x", "Storm")]),
            score: 0.123456789,
            signals: SignalValues {
                keyword_relevance: 1.0,
                cluster_size: 0.333333333,
                source_diversity: 0.0,
                recency: 0.66666666,
                geo_spread: 0.5,
            },
        };
        let snapshot = ScoredClusterSnapshot::from(&scored);
        assert_eq!(snapshot.score, 0.1235);
        assert_eq!(snapshot.signals["cluster_size"], 0.3333);
        assert_eq!(snapshot.signals["recency"], 0.6667);
        assert_eq!(snapshot.signals.len(), 5);
        assert_eq!(snapshot.label, "Storm");
        assert_eq!(scored.score, 0.123456789);
    }

    #[test]
    fn test_cluster_snapshot_json_shape() {
        let cluster = ArticleCluster::new(0, vec![Article::new("https://a.com/x", "Storm")]);
        let value = serde_json::to_value(ClusterSnapshot::from(&cluster)).unwrap();
        assert_eq!(value["cluster_id"], json!(0));
        assert_eq!(value["label"], json!("Storm"));
        assert_eq!(value["size"], json!(1));
        assert_eq!(value["articles"][0]["url"], json!("https://a.com/x"));
        assert_eq!(value["articles"][0]["domain"], json!(null));
    }
}
