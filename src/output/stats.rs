//! Dataset statistics
//!
//! Record counts per category, logged at the end of crawling and printed by
//! the CLI.

use crate::dataset::Dataset;

/// Record counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStatistics {
    pub health_policies: usize,
    pub healthcare_facilities: usize,
    pub health_programs: usize,
    pub news_updates: usize,
    pub contact_info: usize,
    pub departments: usize,
    pub ehr_relevant_links: usize,
    /// Links found on the root page
    pub discovered_links: usize,
}

impl DatasetStatistics {
    /// Counts the records in `dataset`
    pub fn collect(dataset: &Dataset, discovered_links: usize) -> Self {
        Self {
            health_policies: dataset.health_policies.len(),
            healthcare_facilities: dataset.healthcare_facilities.len(),
            health_programs: dataset.health_programs.len(),
            news_updates: dataset.news_updates.len(),
            contact_info: dataset.contact_info.len(),
            departments: dataset.departments.len(),
            ehr_relevant_links: dataset.ehr_relevant_links.len(),
            discovered_links,
        }
    }

    /// Category label and count, in dataset order
    pub fn rows(&self) -> [(&'static str, usize); 7] {
        [
            ("Health policies", self.health_policies),
            ("Healthcare facilities", self.healthcare_facilities),
            ("Health programs", self.health_programs),
            ("News updates", self.news_updates),
            ("Contact info entries", self.contact_info),
            ("Departments", self.departments),
            ("EHR-relevant links", self.ehr_relevant_links),
        ]
    }

    pub fn total_records(&self) -> usize {
        self.rows().iter().map(|(_, count)| count).sum()
    }

    /// Logs the run summary at info level
    pub fn log(&self) {
        tracing::info!("=== SCRAPING SUMMARY ===");
        for (label, count) in self.rows() {
            tracing::info!("{} found: {}", label, count);
        }
        tracing::info!("Total discovered links: {}", self.discovered_links);
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &DatasetStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Records by category:");
    for (label, count) in stats.rows() {
        println!("  {}: {}", label, count);
    }
    println!();

    println!("  Total records: {}", stats.total_records());
    println!("  Discovered links: {}", stats.discovered_links);
}
