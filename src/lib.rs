pub mod article;
pub mod clustering;
pub mod config;
pub mod dedupe;
pub mod environment;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod snapshot;
pub mod summary;
pub mod timestamp;

pub use article::Article;
pub use clustering::{cluster_articles, ArticleCluster};
pub use dedupe::dedupe_articles;
pub use pipeline::{run_pipeline, PipelineConfig, PipelineRun};
pub use scoring::{score_clusters, ScoredCluster, ScoringWeights, Signal, SignalValues};
pub use summary::{render_text_report, summarize_clusters, TrendSummary};

pub const TARGET_PIPELINE: &str = "trend_pipeline";
pub const TARGET_CONFIG: &str = "trend_config";
