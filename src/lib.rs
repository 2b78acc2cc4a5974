//! moh-scraper: a health ministry web-presence mapper
//!
//! This crate discovers the links on a ministry of health home page, crawls
//! them category by category (policies, facilities, programs, news, contacts),
//! extracts structured records from each page, and derives an insights report
//! aimed at informing an electronic health record (EHR) system.

pub mod config;
pub mod crawler;
pub mod dataset;
pub mod extract;
pub mod insights;
pub mod output;
pub mod page;

use thiserror::Error;

/// Main error type for scraper runs
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Root page {url} is unreachable: {source}")]
    RootUnreachable {
        url: String,
        source: crawler::FetchError,
    },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{categorize_link, Category, DiscoveredLink};
pub use dataset::Dataset;
pub use insights::InsightReport;
