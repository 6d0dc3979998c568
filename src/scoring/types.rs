use serde::{Deserialize, Serialize};

use crate::clustering::ArticleCluster;

/// The named signals combined into a cluster's composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    KeywordRelevance,
    ClusterSize,
    SourceDiversity,
    Recency,
    GeoSpread,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::KeywordRelevance,
        Signal::ClusterSize,
        Signal::SourceDiversity,
        Signal::Recency,
        Signal::GeoSpread,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Signal::KeywordRelevance => "keyword_relevance",
            Signal::ClusterSize => "cluster_size",
            Signal::SourceDiversity => "source_diversity",
            Signal::Recency => "recency",
            Signal::GeoSpread => "geo_spread",
        }
    }

    pub fn from_name(name: &str) -> Option<Signal> {
        Signal::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Normalized signal values for one cluster, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalValues {
    pub keyword_relevance: f64,
    pub cluster_size: f64,
    pub source_diversity: f64,
    pub recency: f64,
    pub geo_spread: f64,
}

impl SignalValues {
    pub fn get(&self, signal: Signal) -> f64 {
        match signal {
            Signal::KeywordRelevance => self.keyword_relevance,
            Signal::ClusterSize => self.cluster_size,
            Signal::SourceDiversity => self.source_diversity,
            Signal::Recency => self.recency,
            Signal::GeoSpread => self.geo_spread,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Signal, f64)> + '_ {
        Signal::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// A cluster together with its composite score and normalized signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCluster {
    pub cluster: ArticleCluster,
    pub score: f64,
    pub signals: SignalValues,
}
