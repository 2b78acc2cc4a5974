//! Output module for persisting scrape results
//!
//! This module handles:
//! - Writing the dataset and insight report as JSON
//! - Exporting each dataset category as a CSV table
//! - Generating a markdown summary of the run
//! - Recording dataset statistics

mod csv_output;
mod json_output;
mod markdown;
pub mod stats;
mod traits;

pub use csv_output::CsvOutputHandler;
pub use json_output::JsonOutputHandler;
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::{print_statistics, DatasetStatistics};
pub use traits::{OutputError, OutputHandler, OutputResult, RunSummary};

use crate::config::Config;
use crate::crawler::CrawlOutcome;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// File name stamp shared by every file of one run
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Writes every output file for a finished run
///
/// The output directory is created if needed. JSON and CSV files go there;
/// the markdown summary goes to `summary-path` when one is configured.
///
/// # Returns
///
/// * `Ok(paths)` - Every file written, summary last
/// * `Err(OutputError)` - A file could not be written
pub fn persist_run(
    config: &Config,
    outcome: &CrawlOutcome,
    config_hash: &str,
) -> OutputResult<Vec<PathBuf>> {
    persist_run_at(config, outcome, config_hash, Utc::now())
}

/// [`persist_run`] with an explicit generation time
pub fn persist_run_at(
    config: &Config,
    outcome: &CrawlOutcome,
    config_hash: &str,
    generated_at: DateTime<Utc>,
) -> OutputResult<Vec<PathBuf>> {
    let directory = Path::new(&config.output.directory);
    std::fs::create_dir_all(directory)?;

    let stamp = generated_at.format(STAMP_FORMAT).to_string();
    let handlers: Vec<Box<dyn OutputHandler>> = vec![
        Box::new(JsonOutputHandler::new(directory, stamp.as_str())),
        Box::new(CsvOutputHandler::new(directory, stamp.as_str())),
    ];

    let mut files = Vec::new();
    for handler in &handlers {
        let written = handler.write_dataset(&outcome.dataset)?;
        tracing::debug!("{} handler wrote {} dataset files", handler.name(), written.len());
        files.extend(written);
    }
    for handler in &handlers {
        files.extend(handler.write_insights(&outcome.insights)?);
    }

    if let Some(summary_path) = &config.output.summary_path {
        let summary = RunSummary {
            generated_at,
            root_url: config.scraper.root_url.clone(),
            config_hash: config_hash.to_string(),
            statistics: DatasetStatistics::collect(&outcome.dataset, outcome.links.len()),
            regulatory_documents: outcome.insights.regulatory_requirements.len(),
            facility_types: outcome.insights.facility_types.clone(),
            recommendations: outcome.insights.recommendations.clone(),
            files: files.clone(),
        };
        let path = PathBuf::from(summary_path);
        generate_markdown_summary(&summary, &path)?;
        tracing::info!("Summary written to {}", path.display());
        files.push(path);
    }

    Ok(files)
}
