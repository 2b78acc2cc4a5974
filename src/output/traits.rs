//! Output handler traits and types
//!
//! This module defines the trait interface for output handlers and the
//! run summary handed to the markdown writer.

use crate::dataset::Dataset;
use crate::insights::InsightReport;
use crate::output::stats::DatasetStatistics;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// What a finished run wrote and found, for the markdown summary
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub root_url: String,
    pub config_hash: String,
    pub statistics: DatasetStatistics,
    pub regulatory_documents: usize,
    pub facility_types: Vec<String>,
    pub recommendations: Vec<String>,
    /// Every file written before the summary itself
    pub files: Vec<PathBuf>,
}

impl RunSummary {
    /// Share of discovered links that scored for EHR relevance, as a percentage
    pub fn ehr_link_rate(&self) -> f64 {
        if self.statistics.discovered_links == 0 {
            return 0.0;
        }
        (self.statistics.ehr_relevant_links as f64 / self.statistics.discovered_links as f64)
            * 100.0
    }
}

/// Trait for output handlers
///
/// A handler persists one run's results in its own format and reports the
/// paths it wrote. Writing nothing is valid.
pub trait OutputHandler {
    /// Short format name used in logs
    fn name(&self) -> &'static str;

    /// Persists the dataset
    ///
    /// # Returns
    ///
    /// * `Ok(paths)` - Files written, possibly none
    /// * `Err(OutputError)` - A file could not be written
    fn write_dataset(&self, dataset: &Dataset) -> OutputResult<Vec<PathBuf>>;

    /// Persists the insight report
    fn write_insights(&self, insights: &InsightReport) -> OutputResult<Vec<PathBuf>>;
}
