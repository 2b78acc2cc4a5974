//! Crawler module for page fetching and crawl orchestration
//!
//! This module contains the core crawling logic, including:
//! - Link classification by keyword tables
//! - HTTP fetching and HTML parsing into page trees
//! - Root page link discovery
//! - Per-category crawl phases and overall coordination

mod category;
mod coordinator;
mod discovery;
mod fetcher;
mod parser;

pub use category::{
    categorize_link, Category, KeywordRule, CLASSIFICATION_RULES, CRAWL_RULES,
    RELEVANT_LINK_KEYWORDS,
};
pub use coordinator::{run_scraper, Coordinator, CrawlOutcome};
pub use discovery::{discover, links_on_page, DiscoveredLink};
pub use fetcher::{build_http_client, user_agent_string, FetchError, HttpFetcher, PageFetcher};
pub use parser::{parse_page, resolve_href};

use crate::config::Config;
use crate::Result;
use std::path::PathBuf;

/// Runs a complete scrape
///
/// This is the main entry point for starting a run. It will:
/// 1. Build the HTTP client
/// 2. Discover and classify links on the root page
/// 3. Crawl each category in turn
/// 4. Aggregate EHR insights
/// 5. Write the dataset, CSV tables, insights and summary
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `config_hash` - Hash of the config file, recorded in the summary
///
/// # Returns
///
/// * `Ok(files)` - Paths of every file written
/// * `Err(ScraperError)` - The run failed and nothing was written
pub async fn crawl(config: &Config, config_hash: &str) -> Result<Vec<PathBuf>> {
    let (_, files) = run_scraper(config, config_hash).await?;
    Ok(files)
}
