//! Loading of keyword and pipeline configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::pipeline::PipelineConfig;
use crate::TARGET_CONFIG;

/// One entry of the keywords file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
}

/// Keywords file: `{"query": [{"keyword": "..."}, ...]}`.
///
/// Other top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub query: Vec<KeywordEntry>,
}

impl KeywordConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Malformed keywords configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read keywords file {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Invalid keywords file {}", path.display()))?;
        info!(target: TARGET_CONFIG, "Loaded {} keywords from {}", config.query.len(), path.display());
        Ok(config)
    }

    /// Non-empty keywords in file order.
    pub fn keywords(&self) -> Vec<String> {
        self.query
            .iter()
            .map(|entry| entry.keyword.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    }
}

/// Parse a pipeline configuration; every field is optional.
pub fn parse_pipeline_config(content: &str) -> Result<PipelineConfig> {
    serde_json::from_str(content).context("Malformed pipeline configuration")
}

pub fn load_pipeline_config(path: &Path) -> Result<PipelineConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pipeline config {}", path.display()))?;
    let config = parse_pipeline_config(&content)
        .with_context(|| format!("Invalid pipeline config {}", path.display()))?;
    info!(target: TARGET_CONFIG, "Loaded pipeline config from {}", path.display());
    Ok(config)
}
