//! Crawl coordination
//!
//! The coordinator drives one run from start to finish:
//! - discovering and classifying the links on the root page
//! - scoring those links for EHR relevance
//! - one crawl phase per category, separated by a politeness pause
//! - aggregating insights over the finished dataset
//!
//! Fetches happen one at a time. A page that cannot be fetched contributes
//! nothing; only an unreachable root page aborts the run.

use crate::config::Config;
use crate::crawler::category::Category;
use crate::crawler::discovery::{discover, DiscoveredLink};
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::dataset::Dataset;
use crate::extract::{
    extract_contacts, extract_facilities, extract_news, extract_policies, extract_programs,
};
use crate::insights::{aggregate, rank_ehr_relevant_links, InsightReport};
use crate::output::{persist_run, DatasetStatistics};
use crate::page::Page;
use crate::{Result, ScraperError};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub links: Vec<DiscoveredLink>,
    pub dataset: Dataset,
    pub insights: InsightReport,
}

/// Main crawl coordinator
pub struct Coordinator<'a> {
    fetcher: &'a dyn PageFetcher,
    root_url: Url,
    phase_delay: Duration,
}

impl<'a> Coordinator<'a> {
    /// Creates a coordinator crawling from `root_url` through `fetcher`
    pub fn new(fetcher: &'a dyn PageFetcher, root_url: Url, phase_delay: Duration) -> Self {
        Self {
            fetcher,
            root_url,
            phase_delay,
        }
    }

    /// Runs discovery, every crawl phase and insight aggregation
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::RootUnreachable`] if the root page cannot be
    /// fetched during discovery. No later phase runs in that case.
    pub async fn run(&self) -> Result<CrawlOutcome> {
        tracing::info!("Starting MOH website scraping from {}", self.root_url);

        let links = discover(self.fetcher, &self.root_url)
            .await
            .map_err(|source| ScraperError::RootUnreachable {
                url: self.root_url.to_string(),
                source,
            })?;

        let mut dataset = Dataset::new();
        dataset.ehr_relevant_links = rank_ehr_relevant_links(&links);

        for category in Category::CRAWLED {
            self.pause().await;
            dataset = self.crawl_category(category, &links, dataset).await;
        }

        DatasetStatistics::collect(&dataset, links.len()).log();

        let insights = aggregate(&dataset, &links);
        tracing::info!("Scraping completed successfully");

        Ok(CrawlOutcome {
            links,
            dataset,
            insights,
        })
    }

    /// Runs one crawl phase and returns the grown dataset
    ///
    /// Every discovered link whose text matches the category's crawl keywords
    /// is fetched and extracted, regardless of the category it was given at
    /// discovery. The policy phase also extracts from the root page first and
    /// the contact phase extracts from it last.
    pub async fn crawl_category(
        &self,
        category: Category,
        links: &[DiscoveredLink],
        mut dataset: Dataset,
    ) -> Dataset {
        tracing::info!("Scraping {} pages...", category);

        if category == Category::Policy {
            if let Some(page) = self.fetch_or_skip(self.root_url.as_str()).await {
                extract_into(category, &page, self.root_url.as_str(), &mut dataset);
            }
        }

        let selected: Vec<&DiscoveredLink> = links
            .iter()
            .filter(|link| category.selects(&link.text))
            .collect();
        tracing::debug!("{} links selected for the {} phase", selected.len(), category);

        for link in selected {
            if let Some(page) = self.fetch_or_skip(&link.url).await {
                extract_into(category, &page, &link.url, &mut dataset);
            }
        }

        if category == Category::Contact {
            if let Some(page) = self.fetch_or_skip(self.root_url.as_str()).await {
                extract_into(category, &page, self.root_url.as_str(), &mut dataset);
            }
        }

        dataset
    }

    async fn fetch_or_skip(&self, url: &str) -> Option<Page> {
        match self.fetcher.fetch(url).await {
            Ok(page) => Some(page),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", url, e);
                None
            }
        }
    }

    async fn pause(&self) {
        if !self.phase_delay.is_zero() {
            tokio::time::sleep(self.phase_delay).await;
        }
    }
}

/// Runs the category's extractor and appends what it found
fn extract_into(category: Category, page: &Page, source_url: &str, dataset: &mut Dataset) {
    match category {
        Category::Policy => {
            let found = extract_policies(page, source_url);
            for policy in &found {
                tracing::info!("Found policy document: {} -> {}", policy.title, policy.url);
            }
            dataset.health_policies.extend(found);
        }
        Category::Facility => dataset
            .healthcare_facilities
            .extend(extract_facilities(page, source_url)),
        Category::Program => dataset
            .health_programs
            .extend(extract_programs(page, source_url)),
        Category::News => dataset.news_updates.extend(extract_news(page, source_url)),
        Category::Contact => {
            let found = extract_contacts(page, source_url);
            dataset.contact_info.extend(found.contacts);
            dataset.departments.extend(found.departments);
        }
        Category::Other => {}
    }
}

/// Runs a complete scrape with the HTTP fetcher and writes every output file
///
/// Nothing is written when the run fails.
///
/// # Example
///
/// ```no_run
/// use moh_scraper::config::load_config_with_hash;
/// use moh_scraper::crawler::run_scraper;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let (config, hash) = load_config_with_hash(Path::new("config.toml"))?;
/// let (outcome, files) = run_scraper(&config, &hash).await?;
/// println!("{} records in {} files", outcome.dataset.total_records(), files.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scraper(
    config: &Config,
    config_hash: &str,
) -> Result<(CrawlOutcome, Vec<PathBuf>)> {
    let root_url = Url::parse(&config.scraper.root_url)?;
    let fetcher = HttpFetcher::new(&config.user_agent, config.scraper.request_timeout())?;

    let coordinator = Coordinator::new(&fetcher, root_url, config.scraper.phase_delay());
    let outcome = coordinator.run().await?;

    let files = persist_run(config, &outcome, config_hash)?;
    Ok((outcome, files))
}
