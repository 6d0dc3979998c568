//! Raw per-cluster signals and batch normalization.

use chrono::NaiveDateTime;
use std::collections::HashSet;

use crate::clustering::ArticleCluster;
use crate::timestamp::parse_optional;

/// Hours assumed since the latest article when no timestamp parses (7 days).
pub const FALLBACK_RECENCY_HOURS: f64 = 168.0;

/// Un-normalized signal values for a single cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSignals {
    pub keyword_relevance: f64,
    pub cluster_size: f64,
    pub source_diversity: f64,
    /// Hours between `now` and the newest article; lower is more recent.
    pub recency_hours: f64,
    pub geo_spread: f64,
}

/// Fraction of member titles containing at least one keyword, case-insensitively.
///
/// Returns 1.0 when there are no keywords.
pub fn keyword_relevance(cluster: &ArticleCluster, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 1.0;
    }
    if cluster.articles.is_empty() {
        return 0.0;
    }
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let matches = cluster
        .articles
        .iter()
        .filter(|article| {
            let title = article.title.to_lowercase();
            lowered.iter().any(|k| title.contains(k.as_str()))
        })
        .count();
    matches as f64 / cluster.articles.len() as f64
}

/// Number of distinct non-empty domains among the members.
pub fn distinct_domains(cluster: &ArticleCluster) -> usize {
    cluster
        .articles
        .iter()
        .filter_map(|a| a.domain())
        .collect::<HashSet<_>>()
        .len()
}

/// Number of distinct non-empty source countries among the members.
pub fn distinct_countries(cluster: &ArticleCluster) -> usize {
    cluster
        .articles
        .iter()
        .filter_map(|a| a.source_country())
        .collect::<HashSet<_>>()
        .len()
}

/// Hours since the newest parseable seen timestamp, never negative.
pub fn recency_hours(cluster: &ArticleCluster, now: NaiveDateTime) -> f64 {
    cluster
        .articles
        .iter()
        .filter_map(|a| parse_optional(a.seen_timestamp.as_deref()))
        .max()
        .map(|latest| ((now - latest).num_milliseconds() as f64 / 3_600_000.0).max(0.0))
        .unwrap_or(FALLBACK_RECENCY_HOURS)
}

pub fn compute_raw_signals(
    cluster: &ArticleCluster,
    now: NaiveDateTime,
    keywords: &[String],
) -> RawSignals {
    RawSignals {
        keyword_relevance: keyword_relevance(cluster, keywords),
        cluster_size: cluster.size() as f64,
        source_diversity: distinct_domains(cluster) as f64,
        recency_hours: recency_hours(cluster, now),
        geo_spread: distinct_countries(cluster) as f64,
    }
}

/// Min-max scale `values` to `[0, 1]`.
///
/// A degenerate batch (max equals min) maps every value to 1.0, with or
/// without `invert`. Otherwise `invert` flips the scale so lower raw values
/// score higher.
pub fn min_max_normalize(values: &[f64], invert: bool) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi == lo {
        return vec![1.0; values.len()];
    }
    values
        .iter()
        .map(|v| {
            let scaled = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
            if invert {
                1.0 - scaled
            } else {
                scaled
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Article;
    use crate::timestamp::parse_seen_timestamp;

    fn cluster(articles: Vec<Article>) -> ArticleCluster {
        ArticleCluster::new(0, articles)
    }

    #[test]
    fn test_keyword_relevance() {
        let c = cluster(vec![
            Article::new("u1", "Storm hits coast"),
            Article::new("u2", "Election results announced"),
        ]);
        assert_eq!(keyword_relevance(&c, &[]), 1.0);
        assert_eq!(keyword_relevance(&c, &["STORM".to_string()]), 0.5);
        assert_eq!(
            keyword_relevance(&c, &["storm".to_string(), "election".to_string()]),
            1.0
        );
        assert_eq!(keyword_relevance(&c, &["flood".to_string()]), 0.0);
    }

    #[test]
    fn test_distinct_counts_skip_empty_values() {
        let c = cluster(vec![
            Article::new("u1", "a").with_domain("a.com").with_source_country("US"),
            Article::new("u2", "b").with_domain("a.com").with_source_country(""),
            Article::new("u3", "c").with_domain("b.com").with_source_country("UK"),
            Article::new("u4", "d").with_domain(""),
        ]);
        assert_eq!(distinct_domains(&c), 2);
        assert_eq!(distinct_countries(&c), 2);
    }

    #[test]
    fn test_recency_uses_latest_parseable_timestamp() {
        let now = parse_seen_timestamp("20260214T120000Z").unwrap();
        let c = cluster(vec![
            Article::new("u1", "a").with_seen_timestamp("20260214T060000Z"),
            Article::new("u2", "b").with_seen_timestamp("2026-02-14T09:30:00"),
            Article::new("u3", "c").with_seen_timestamp("garbage"),
        ]);
        assert_eq!(recency_hours(&c, now), 2.5);

        let undated = cluster(vec![Article::new("u1", "a").with_seen_timestamp("garbage")]);
        assert_eq!(recency_hours(&undated, now), FALLBACK_RECENCY_HOURS);

        let future = cluster(vec![Article::new("u1", "a").with_seen_timestamp("20260215T000000Z")]);
        assert_eq!(recency_hours(&future, now), 0.0);
    }

    #[test]
    fn test_min_max_normalize() {
        assert_eq!(min_max_normalize(&[1.0, 3.0, 2.0], false), vec![0.0, 1.0, 0.5]);
        assert_eq!(min_max_normalize(&[1.0, 3.0, 2.0], true), vec![1.0, 0.0, 0.5]);
        assert_eq!(min_max_normalize(&[4.0, 4.0], false), vec![1.0, 1.0]);
        assert_eq!(min_max_normalize(&[4.0, 4.0], true), vec![1.0, 1.0]);
        assert!(min_max_normalize(&[], false).is_empty());
    }
}
