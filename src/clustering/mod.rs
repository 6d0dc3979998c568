// Module declarations
pub mod linkage;
pub mod tfidf;
pub mod types;

pub use types::*;

pub use linkage::average_linkage;
pub use tfidf::{fit_transform, tokenize, SparseVector};

use tracing::debug;

use crate::article::Article;
use crate::TARGET_PIPELINE;

/// Default cosine distance at or below which groups of titles are merged
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.60;

/// Groups articles into topic clusters by title similarity
///
/// Titles are vectorized with TF-IDF and merged with average-linkage
/// agglomerative clustering on cosine distance.
///
/// # Arguments
/// * `articles` - Deduplicated articles in batch order
/// * `distance_threshold` - Maximum average cosine distance inside a merged group
///
/// # Returns
/// * `Vec<ArticleCluster>` - Clusters sorted by size descending; ties keep the
///   order of each cluster's earliest member and `cluster_id` is the position
pub fn cluster_articles(articles: &[Article], distance_threshold: f64) -> Vec<ArticleCluster> {
    if articles.is_empty() {
        return Vec::new();
    }
    if articles.len() == 1 {
        return vec![ArticleCluster::new(0, articles.to_vec())];
    }

    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    let vectors = fit_transform(&titles);

    let n = vectors.len();
    let mut distances = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = vectors[i].cosine_distance(&vectors[j]);
            distances[i][j] = d;
            distances[j][i] = d;
        }
    }

    let groups = average_linkage(&distances, distance_threshold);

    let mut clusters: Vec<ArticleCluster> = groups
        .into_iter()
        .map(|members| {
            let members = members.into_iter().map(|idx| articles[idx].clone()).collect();
            ArticleCluster::new(0, members)
        })
        .collect();

    // Stable, so equal sizes keep first-appearance order.
    clusters.sort_by(|a, b| b.size().cmp(&a.size()));
    for (position, cluster) in clusters.iter_mut().enumerate() {
        cluster.cluster_id = position;
    }

    debug!(
        target: TARGET_PIPELINE,
        "Clustered {} articles into {} clusters (threshold={}, largest={})",
        articles.len(),
        clusters.len(),
        distance_threshold,
        clusters.first().map_or(0, ArticleCluster::size)
    );
    clusters
}
