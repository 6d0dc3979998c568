//! Extractive trend summaries built from ranked clusters.

pub mod report;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

pub use self::report::render_text_report;
use crate::clustering::ArticleCluster;
use crate::scoring::signals::distinct_domains;
use crate::scoring::ScoredCluster;
use crate::timestamp::parse_optional;
use crate::TARGET_PIPELINE;

/// Maximum number of trends included by default
pub const DEFAULT_MAX_TRENDS: usize = 10;

/// Maximum number of member URLs listed per trend by default
pub const DEFAULT_MAX_URLS_PER_TREND: usize = 5;

/// One ranked trend, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub rank: usize,
    pub headline: String,
    pub score: f64,
    pub article_count: usize,
    pub source_count: usize,
    pub countries: Vec<String>,
    pub date_range: String,
    pub top_urls: Vec<String>,
}

/// Human-readable span of the cluster's parseable seen timestamps.
///
/// `"unknown"` when none parse, `"Feb 14, 2026"` when all fall on one
/// calendar date, otherwise `"Feb 12 – Feb 14, 2026"`.
pub fn date_range(cluster: &ArticleCluster) -> String {
    let dates: Vec<_> = cluster
        .articles
        .iter()
        .filter_map(|a| parse_optional(a.seen_timestamp.as_deref()))
        .collect();

    let (Some(earliest), Some(latest)) = (dates.iter().min(), dates.iter().max()) else {
        return "unknown".to_string();
    };

    if earliest.date() == latest.date() {
        earliest.format("%b %d, %Y").to_string()
    } else {
        format!(
            "{} \u{2013} {}",
            earliest.format("%b %d"),
            latest.format("%b %d, %Y")
        )
    }
}

/// Converts scored clusters into ranked trend summaries
///
/// # Arguments
/// * `scored` - Clusters already sorted by score descending
/// * `max_trends` - Maximum number of trends to include
/// * `max_urls_per_trend` - Maximum member URLs listed per trend
///
/// # Returns
/// * `Vec<TrendSummary>` - The first `min(max_trends, scored.len())` clusters, ranked from 1
pub fn summarize_clusters(
    scored: &[ScoredCluster],
    max_trends: usize,
    max_urls_per_trend: usize,
) -> Vec<TrendSummary> {
    let summaries: Vec<TrendSummary> = scored
        .iter()
        .take(max_trends)
        .enumerate()
        .map(|(idx, sc)| {
            let cluster = &sc.cluster;
            let countries: BTreeSet<&str> = cluster
                .articles
                .iter()
                .filter_map(|a| a.source_country())
                .collect();

            TrendSummary {
                rank: idx + 1,
                headline: cluster.label().to_string(),
                score: sc.score,
                article_count: cluster.size(),
                source_count: distinct_domains(cluster),
                countries: countries.into_iter().map(str::to_string).collect(),
                date_range: date_range(cluster),
                top_urls: cluster
                    .articles
                    .iter()
                    .take(max_urls_per_trend)
                    .map(|a| a.url.clone())
                    .collect(),
            }
        })
        .collect();

    debug!(
        target: TARGET_PIPELINE,
        "Summarized {} of {} scored clusters",
        summaries.len(),
        scored.len()
    );
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Article;
    use crate::scoring::SignalValues;

    fn scored(id: usize, score: f64, articles: Vec<Article>) -> ScoredCluster {
        ScoredCluster {
            cluster: ArticleCluster::new(id, articles),
            score,
            signals: SignalValues::default(),
        }
    }

    #[test]
    fn test_date_range_formats() {
        let unknown = ArticleCluster::new(0, vec![Article::new("u", "t").with_seen_timestamp("??")]);
        assert_eq!(date_range(&unknown), "unknown");

        let same_day = ArticleCluster::new(
            0,
            vec![
                Article::new("u1", "t").with_seen_timestamp("20260214T010000Z"),
                Article::new("u2", "t").with_seen_timestamp("2026-02-14T23:00:00"),
            ],
        );
        assert_eq!(date_range(&same_day), "Feb 14, 2026");

        let span = ArticleCluster::new(
            0,
            vec![
                Article::new("u1", "t").with_seen_timestamp("20260214T010000Z"),
                Article::new("u2", "t").with_seen_timestamp("20251230T120000Z"),
                Article::new("u3", "t"),
            ],
        );
        assert_eq!(date_range(&span), "Dec 30 \u{2013} Feb 14, 2026");
    }

    #[test]
    fn test_summary_fields() {
        let articles = vec![
            Article::new("https://a.com/1", "Storm hits coast")
                .with_domain("a.com")
                .with_source_country("US"),
            Article::new("https://b.com/2", "Storm hits towns")
                .with_domain("b.com")
                .with_source_country("FR"),
            Article::new("https://a.com/3", "Storm moves inland")
                .with_domain("a.com")
                .with_source_country("US"),
        ];
        let summaries = summarize_clusters(&[scored(0, 0.75, articles)], 10, 2);
        let summary = &summaries[0];

        assert_eq!(summary.rank, 1);
        assert_eq!(summary.headline, "Storm hits coast");
        assert_eq!(summary.score, 0.75);
        assert_eq!(summary.article_count, 3);
        assert_eq!(summary.source_count, 2);
        assert_eq!(summary.countries, vec!["FR", "US"]);
        assert_eq!(summary.date_range, "unknown");
        assert_eq!(summary.top_urls, vec!["https://a.com/1", "https://b.com/2"]);
    }

    #[test]
    fn test_length_and_ranks_follow_max_trends() {
        let input: Vec<ScoredCluster> = (0..4)
            .map(|i| scored(i, 1.0 - i as f64 * 0.1, vec![Article::new(format!("u{}", i), "t")]))
            .collect();

        for k in 0..6 {
            let summaries = summarize_clusters(&input, k, DEFAULT_MAX_URLS_PER_TREND);
            assert_eq!(summaries.len(), k.min(input.len()));
            let ranks: Vec<usize> = summaries.iter().map(|s| s.rank).collect();
            assert_eq!(ranks, (1..=summaries.len()).collect::<Vec<_>>());
        }
        assert!(summarize_clusters(&[], DEFAULT_MAX_TRENDS, DEFAULT_MAX_URLS_PER_TREND).is_empty());
    }
}
