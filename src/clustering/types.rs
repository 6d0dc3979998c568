use serde::{Deserialize, Serialize};

use crate::article::Article;

/// Struct representing a group of articles about the same story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleCluster {
    /// Position in the size-descending order; 0 is the largest cluster.
    pub cluster_id: usize,
    /// Members in their original batch order.
    pub articles: Vec<Article>,
}

impl ArticleCluster {
    pub fn new(cluster_id: usize, articles: Vec<Article>) -> Self {
        Self {
            cluster_id,
            articles,
        }
    }

    pub fn size(&self) -> usize {
        self.articles.len()
    }

    /// Title of the earliest member.
    pub fn label(&self) -> &str {
        self.articles
            .first()
            .map(|a| a.title.as_str())
            .unwrap_or_default()
    }
}
