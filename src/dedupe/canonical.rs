use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use tracing::debug;
use url::Url;

use crate::TARGET_PIPELINE;

/// Query parameters that only carry campaign or click tracking.
pub const TRACKING_PARAMS: [&str; 10] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
    "igshid",
    "mc_cid",
    "mc_eid",
];

static REPEATED_SLASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"/{2,}").expect("valid regex"));

/// Normalized identity form of an article URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalUrl {
    url: String,
    path: String,
}

impl CanonicalUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Path component without query or fragment.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Canonicalize a URL for identity comparison.
///
/// - a missing scheme defaults to `https`
/// - scheme and host are lowercased
/// - repeated path slashes collapse, an empty path becomes `/`, and a
///   trailing slash on a non-root path is dropped
/// - tracking query parameters are removed; the rest keep their order
/// - the fragment is dropped
pub fn canonicalize_url(raw: &str) -> CanonicalUrl {
    let trimmed = raw.trim();
    let parsed = match Url::parse(trimmed) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", trimmed.trim_start_matches('/'))).ok()
        }
        Err(_) => None,
    };

    match parsed {
        Some(url) => canonicalize_parsed(url),
        None => canonicalize_opaque(trimmed),
    }
}

fn canonicalize_parsed(mut url: Url) -> CanonicalUrl {
    if let Some(host) = url.host_str() {
        let lower = host.to_lowercase();
        if lower != host && url.set_host(Some(&lower)).is_err() {
            debug!(target: TARGET_PIPELINE, "Keeping host of {} as parsed", url);
        }
    }

    if !url.cannot_be_a_base() {
        let path = normalize_path(url.path());
        url.set_path(&path);
    }

    if url.query().is_some() {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.as_ref()))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
    }

    url.set_fragment(None);

    CanonicalUrl {
        path: url.path().to_string(),
        url: url.to_string(),
    }
}

/// Fallback for strings the URL parser rejects outright: lowercase and drop
/// the fragment so identical junk still compares equal.
fn canonicalize_opaque(raw: &str) -> CanonicalUrl {
    let without_fragment = raw.split('#').next().unwrap_or_default().to_lowercase();
    let path = without_fragment
        .split('?')
        .next()
        .unwrap_or_default()
        .to_string();
    CanonicalUrl {
        url: without_fragment,
        path,
    }
}

fn normalize_path(path: &str) -> String {
    let collapsed = REPEATED_SLASHES.replace_all(path, "/");
    let trimmed = collapsed.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Trim, lowercase, and collapse internal whitespace.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hex SHA-256 of `normalized_title|canonical_path`.
pub fn fallback_key(title: &str, canonical: &CanonicalUrl) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_title(title).as_bytes());
    hasher.update(b"|");
    hasher.update(canonical.path().as_bytes());
    format!("{:x}", hasher.finalize())
}
