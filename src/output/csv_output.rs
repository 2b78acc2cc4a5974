//! CSV output
//!
//! One file per non-empty category, `moh_<category>_<stamp>.csv`. The header
//! is taken from the first record of the category; a later record lacking a
//! column gets an empty cell and a field outside the header is dropped.

use crate::dataset::{CategoryTable, Dataset};
use crate::insights::InsightReport;
use crate::output::traits::{OutputHandler, OutputResult};
use std::path::{Path, PathBuf};

/// Writes one CSV table per dataset category
#[derive(Debug, Clone)]
pub struct CsvOutputHandler {
    directory: PathBuf,
    stamp: String,
}

impl CsvOutputHandler {
    pub fn new(directory: impl Into<PathBuf>, stamp: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            stamp: stamp.into(),
        }
    }

    pub fn table_path(&self, category: &str) -> PathBuf {
        self.directory
            .join(format!("moh_{}_{}.csv", category, self.stamp))
    }
}

impl OutputHandler for CsvOutputHandler {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn write_dataset(&self, dataset: &Dataset) -> OutputResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        for table in dataset.tables() {
            if table.is_empty() {
                continue;
            }
            let path = self.table_path(table.name);
            write_table(&path, &table)?;
            tracing::info!("Category '{}' saved to {}", table.name, path.display());
            written.push(path);
        }
        Ok(written)
    }

    fn write_insights(&self, _insights: &InsightReport) -> OutputResult<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

fn write_table(path: &Path, table: &CategoryTable) -> OutputResult<()> {
    let headers = table.headers();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&headers)?;

    for row in &table.rows {
        let cells = headers.iter().map(|header| {
            row.iter()
                .find(|(name, _)| name == header)
                .map(|(_, value)| value.as_str())
                .unwrap_or("")
        });
        writer.write_record(cells)?;
    }

    writer.flush()?;
    Ok(())
}
