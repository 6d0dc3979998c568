//! Article deduplication.
//!
//! Identity is resolved in two steps: the canonical URL first, then a
//! fallback hash of the normalized title and canonical path. Records without
//! a URL or title are treated as duplicates.

pub mod canonical;

use std::collections::HashSet;
use tracing::debug;

pub use self::canonical::{canonicalize_url, fallback_key, normalize_title, CanonicalUrl};
use crate::article::Article;
use crate::TARGET_PIPELINE;

/// Keys accepted so far during a single deduplication pass.
#[derive(Debug, Default)]
pub struct SeenKeys {
    urls: HashSet<String>,
    fallbacks: HashSet<String>,
}

impl SeenKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` and records the article's keys if it is new.
    ///
    /// Keys are only recorded on acceptance, so a rejected article never
    /// shadows a later one.
    pub fn admit(&mut self, article: &Article) -> bool {
        let url = article.url.trim();
        let title = article.title.trim();
        if url.is_empty() || title.is_empty() {
            return false;
        }

        let canonical = canonicalize_url(url);
        if self.urls.contains(canonical.as_str()) {
            return false;
        }

        let fallback = fallback_key(title, &canonical);
        if self.fallbacks.contains(&fallback) {
            return false;
        }

        self.urls.insert(canonical.as_str().to_string());
        self.fallbacks.insert(fallback);
        true
    }
}

/// Split articles into `(unique, duplicates)`, preserving relative order in both.
///
/// # Arguments
/// * `articles` - Articles in fetch order
///
/// # Returns
/// * `(unique, duplicates)` - A partition of the input; invalid records land in `duplicates`
pub fn dedupe_articles(articles: &[Article]) -> (Vec<Article>, Vec<Article>) {
    let mut seen = SeenKeys::new();
    let mut unique = Vec::new();
    let mut duplicates = Vec::new();

    for article in articles {
        if seen.admit(article) {
            unique.push(article.clone());
        } else {
            duplicates.push(article.clone());
        }
    }

    debug!(
        target: TARGET_PIPELINE,
        "Deduplicated {} articles: {} unique, {} duplicates",
        articles.len(),
        unique.len(),
        duplicates.len()
    );
    (unique, duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(url: &str, title: &str) -> Article {
        Article::new(url, title)
    }

    #[test]
    fn test_tracking_fragment_and_trailing_slash_collapse() {
        let input = vec![
            article("https://a.com/x?utm_source=y", "Storm hits coast"),
            article("https://a.com/x", "Storm hits coast"),
            article("https://A.com/x/#top", "Storm hits coast"),
            article("https://b.com/z", "Election results announced"),
        ];
        let (unique, duplicates) = dedupe_articles(&input);
        assert_eq!(unique.len(), 2);
        assert_eq!(duplicates.len(), 2);
        assert_eq!(unique[0].url, "https://a.com/x?utm_source=y");
        assert_eq!(unique[1].url, "https://b.com/z");
    }

    #[test]
    fn test_invalid_records_are_duplicates() {
        let input = vec![
            article("", "No url"),
            article("https://a.com/1", "   "),
            article("https://a.com/2", "Valid"),
        ];
        let (unique, duplicates) = dedupe_articles(&input);
        assert_eq!(unique, vec![input[2].clone()]);
        assert_eq!(duplicates, vec![input[0].clone(), input[1].clone()]);
    }

    #[test]
    fn test_fallback_identity_matches_title_and_path() {
        let input = vec![
            article("https://a.com/news?id=1", "Storm Hits Coast"),
            article("https://b.com/news?id=2", "storm   hits coast"),
            article("https://b.com/news?id=3", "Different story"),
        ];
        let (unique, duplicates) = dedupe_articles(&input);
        assert_eq!(unique.len(), 2);
        assert_eq!(duplicates[0].url, "https://b.com/news?id=2");
    }

    #[test]
    fn test_idempotent_on_unique_batch() {
        let input = vec![
            article("https://a.com/1", "One"),
            article("https://a.com/2", "Two"),
            article("https://b.com/1", "Three"),
        ];
        let (unique, duplicates) = dedupe_articles(&input);
        assert_eq!(unique, input);
        assert!(duplicates.is_empty());

        let (again, none) = dedupe_articles(&unique);
        assert_eq!(again, unique);
        assert!(none.is_empty());
    }

    #[test]
    fn test_partition_preserves_every_record() {
        let input = vec![
            article("https://a.com/1", "One"),
            article("https://a.com/1", "One"),
            article("", ""),
            article("https://a.com/1?utm_campaign=x", "One again"),
            article("https://c.com/2", "Two"),
        ];
        let (unique, duplicates) = dedupe_articles(&input);
        assert_eq!(unique.len() + duplicates.len(), input.len());

        let mut rebuilt: Vec<_> = unique.iter().chain(duplicates.iter()).cloned().collect();
        let mut original = input.clone();
        rebuilt.sort_by(|a, b| (&a.url, &a.title).cmp(&(&b.url, &b.title)));
        original.sort_by(|a, b| (&a.url, &a.title).cmp(&(&b.url, &b.title)));
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_empty_batch() {
        let (unique, duplicates) = dedupe_articles(&[]);
        assert!(unique.is_empty());
        assert!(duplicates.is_empty());
    }
}
