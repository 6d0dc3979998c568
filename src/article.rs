//! Article records as delivered by the fetch collaborator.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::TARGET_PIPELINE;

/// A single fetched news item.
///
/// Every field may be absent in the input; absent or `null` strings decode as
/// empty and absent optional fields as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, alias = "seendate")]
    pub seen_timestamp: Option<String>,
    #[serde(default, alias = "sourcecountry")]
    pub source_country: Option<String>,
    #[serde(default, alias = "sourcelanguage", alias = "language", alias = "sourcelang")]
    pub source_language: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, alias = "socialimage")]
    pub social_image_url: Option<String>,
}

impl Article {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_seen_timestamp(mut self, seen: impl Into<String>) -> Self {
        self.seen_timestamp = Some(seen.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_source_country(mut self, country: impl Into<String>) -> Self {
        self.source_country = Some(country.into());
        self
    }

    /// Domain, if present and non-empty.
    pub fn domain(&self) -> Option<&str> {
        non_empty(self.domain.as_deref())
    }

    /// Source country code, if present and non-empty.
    pub fn source_country(&self) -> Option<&str> {
        non_empty(self.source_country.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Extracts articles from a GDELT DOC API `artlist` payload.
///
/// Reads the `articles` array (or `data` when `articles` is missing or empty),
/// skips entries that are not objects, and drops entries without both a URL
/// and a title. The URL falls back to `sourceCollectionIdentifier`.
pub fn parse_gdelt_payload(payload: &Value) -> Vec<Article> {
    let entries = match payload.get("articles").and_then(Value::as_array) {
        Some(list) if !list.is_empty() => list.as_slice(),
        _ => payload
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
    };

    let text = |entry: &Value, key: &str| -> Option<String> {
        entry
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let mut articles = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.is_object() {
            continue;
        }
        let url = text(entry, "url").or_else(|| text(entry, "sourceCollectionIdentifier"));
        let title = text(entry, "title");
        let (Some(url), Some(title)) = (url, title) else {
            continue;
        };
        articles.push(Article {
            url,
            title,
            seen_timestamp: text(entry, "seendate"),
            source_country: text(entry, "sourcecountry"),
            source_language: text(entry, "language").or_else(|| text(entry, "sourcelang")),
            domain: text(entry, "domain"),
            social_image_url: text(entry, "socialimage"),
        });
    }
    articles
}

/// Decodes articles from text in any of the supported input shapes.
///
/// Accepted: a JSON array of articles, a GDELT payload object, or JSON Lines
/// with one article per line (blank lines skipped).
pub fn parse_articles(content: &str) -> Result<Vec<Article>> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("Failed to parse article array");
    }

    // A single object is either a GDELT payload or the first line of JSONL.
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if value.get("articles").is_some() || value.get("data").is_some() {
            return Ok(parse_gdelt_payload(&value));
        }
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<Article>(line)
                .with_context(|| format!("Failed to parse article on line {}", idx + 1))
        })
        .collect()
}

/// Loads articles from a file on disk. See [`parse_articles`] for formats.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read articles from {}", path.display()))?;
    let articles = parse_articles(&content)
        .with_context(|| format!("Invalid article input in {}", path.display()))?;
    debug!(target: TARGET_PIPELINE, "Loaded {} articles from {}", articles.len(), path.display());
    Ok(articles)
}
