use anyhow::{anyhow, Result};
use clap::Parser;
use news_trends::article::load_articles;
use news_trends::config::{load_pipeline_config, KeywordConfig};
use news_trends::environment::{get_env_var_as_vec, KEYWORDS_ENV};
use news_trends::logging::configure_logging;
use news_trends::output::write_snapshots;
use news_trends::pipeline::{run_pipeline, PipelineConfig};
use news_trends::timestamp::parse_seen_timestamp;
use news_trends::TARGET_PIPELINE;
use std::path::PathBuf;
use tracing::{debug, info};

/// Rank trending news topics from a batch of fetched articles.
///
/// Reads articles (JSON array, JSONL, or a raw GDELT artlist payload), runs
/// dedupe -> cluster -> score -> summarize, writes every stage snapshot to the
/// output directory and prints the text report.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Article input file
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for stage snapshots
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Keywords file ({"query": [{"keyword": "..."}]}); falls back to TRENDS_KEYWORDS
    #[arg(short, long)]
    keywords: Option<PathBuf>,

    /// Pipeline config file (JSON); command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cosine distance threshold for clustering
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Maximum number of trends in the report
    #[arg(short, long)]
    max_trends: Option<usize>,

    /// Reference time for recency, e.g. 20260214T120000Z (default: now, UTC)
    #[arg(long)]
    now: Option<String>,

    /// Directory for rolling log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn build_config(args: &Args) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => load_pipeline_config(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(path) = &args.keywords {
        config.keywords = KeywordConfig::load(path)?.keywords();
    } else if config.keywords.is_empty() {
        config.keywords = get_env_var_as_vec(KEYWORDS_ENV, ';');
    }
    if let Some(threshold) = args.threshold {
        if !threshold.is_finite() {
            return Err(anyhow!("Distance threshold must be a finite number, got {}", threshold));
        }
        config.distance_threshold = threshold;
    }
    if let Some(max_trends) = args.max_trends {
        config.max_trends = max_trends;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(&args.log_dir);

    info!(target: TARGET_PIPELINE, "Starting news-trends");

    let now = match &args.now {
        Some(raw) => Some(
            parse_seen_timestamp(raw).ok_or_else(|| anyhow!("Unrecognized --now timestamp: {}", raw))?,
        ),
        None => None,
    };

    let config = build_config(&args)?;
    debug!(target: TARGET_PIPELINE, "Pipeline config: {:?}", config);

    let articles = load_articles(&args.input)?;
    info!(target: TARGET_PIPELINE, "{} articles loaded from {}", articles.len(), args.input.display());

    let run = run_pipeline(&articles, &config, now);
    write_snapshots(&args.output_dir, &run)?;

    println!("{}", run.report);
    Ok(())
}
