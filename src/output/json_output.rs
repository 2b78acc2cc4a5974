//! JSON output
//!
//! Writes the whole dataset to `moh_data_<stamp>.json` and the insight
//! report to `ehr_insights_<stamp>.json`, pretty-printed.

use crate::dataset::Dataset;
use crate::insights::InsightReport;
use crate::output::traits::{OutputHandler, OutputResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes JSON files into one directory
#[derive(Debug, Clone)]
pub struct JsonOutputHandler {
    directory: PathBuf,
    stamp: String,
}

impl JsonOutputHandler {
    pub fn new(directory: impl Into<PathBuf>, stamp: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            stamp: stamp.into(),
        }
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.directory.join(format!("moh_data_{}.json", self.stamp))
    }

    pub fn insights_path(&self) -> PathBuf {
        self.directory
            .join(format!("ehr_insights_{}.json", self.stamp))
    }
}

impl OutputHandler for JsonOutputHandler {
    fn name(&self) -> &'static str {
        "json"
    }

    fn write_dataset(&self, dataset: &Dataset) -> OutputResult<Vec<PathBuf>> {
        let path = self.dataset_path();
        write_json(&path, dataset)?;
        tracing::info!("Data saved to {}", path.display());
        Ok(vec![path])
    }

    fn write_insights(&self, insights: &InsightReport) -> OutputResult<Vec<PathBuf>> {
        let path = self.insights_path();
        write_json(&path, insights)?;
        tracing::info!("EHR insights saved to {}", path.display());
        Ok(vec![path])
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
