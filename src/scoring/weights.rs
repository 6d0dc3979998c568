use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use super::types::Signal;
use crate::TARGET_CONFIG;

pub const DEFAULT_KEYWORD_RELEVANCE_WEIGHT: f64 = 0.30;
pub const DEFAULT_CLUSTER_SIZE_WEIGHT: f64 = 0.30;
pub const DEFAULT_SOURCE_DIVERSITY_WEIGHT: f64 = 0.15;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.15;
pub const DEFAULT_GEO_SPREAD_WEIGHT: f64 = 0.10;

/// Weight applied to each normalized signal in the composite score.
///
/// Weights are used as given and are not rescaled to sum to 1. When
/// deserialized, missing fields keep their defaults and unknown fields are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub keyword_relevance: f64,
    pub cluster_size: f64,
    pub source_diversity: f64,
    pub recency: f64,
    pub geo_spread: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_relevance: DEFAULT_KEYWORD_RELEVANCE_WEIGHT,
            cluster_size: DEFAULT_CLUSTER_SIZE_WEIGHT,
            source_diversity: DEFAULT_SOURCE_DIVERSITY_WEIGHT,
            recency: DEFAULT_RECENCY_WEIGHT,
            geo_spread: DEFAULT_GEO_SPREAD_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn get(&self, signal: Signal) -> f64 {
        match signal {
            Signal::KeywordRelevance => self.keyword_relevance,
            Signal::ClusterSize => self.cluster_size,
            Signal::SourceDiversity => self.source_diversity,
            Signal::Recency => self.recency,
            Signal::GeoSpread => self.geo_spread,
        }
    }

    pub fn set(&mut self, signal: Signal, weight: f64) {
        match signal {
            Signal::KeywordRelevance => self.keyword_relevance = weight,
            Signal::ClusterSize => self.cluster_size = weight,
            Signal::SourceDiversity => self.source_diversity = weight,
            Signal::Recency => self.recency = weight,
            Signal::GeoSpread => self.geo_spread = weight,
        }
    }

    /// Apply named overrides on top of these weights.
    ///
    /// Names that are not a known signal are skipped with a warning.
    pub fn with_overrides(mut self, overrides: &HashMap<String, f64>) -> Self {
        for (name, &weight) in overrides {
            match Signal::from_name(name) {
                Some(signal) => self.set(signal, weight),
                None => {
                    warn!(target: TARGET_CONFIG, "Ignoring unknown scoring weight '{}'", name);
                }
            }
        }
        self
    }

    /// Highest composite score reachable with these weights.
    pub fn total(&self) -> f64 {
        Signal::ALL.iter().map(|&s| self.get(s)).sum()
    }
}
