//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the identifying user agent string
//! - GET requests with a fixed per-request timeout
//! - Error classification into [`FetchError`]
//!
//! There are no retries. A failed fetch is reported once and the caller
//! decides whether it matters.

use crate::config::UserAgentConfig;
use crate::crawler::parser::parse_page;
use crate::page::Page;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Why a page could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status_code} for {url}")]
    Status { url: String, status_code: u16 },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },
}

/// Source of parsed pages
///
/// The crawl phases only depend on this trait, so tests can serve pages from
/// memory while production goes through [`HttpFetcher`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and parses the body into a page tree
    async fn fetch(&self, url: &str) -> Result<Page, FetchError>;
}

/// Formats the user agent as `CrawlerName/Version (+ContactURL; ContactEmail)`
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    )
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Overall per-request timeout
///
/// # Example
///
/// ```no_run
/// use moh_scraper::config::UserAgentConfig;
/// use moh_scraper::crawler::build_http_client;
/// use std::time::Duration;
///
/// let config = UserAgentConfig {
///     crawler_name: "MohScraper".to_string(),
///     crawler_version: "0.1".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config, Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(config))
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`PageFetcher`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &UserAgentConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self::from_client(build_http_client(config, timeout)?))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status_code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| classify_error(url, e))?;
        Ok(parse_page(&body))
    }
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_builder() {
        FetchError::InvalidUrl {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Network {
            url: url.to_string(),
            message: "Connection refused".to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestCrawler".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&create_test_config(), Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_format() {
        assert_eq!(
            user_agent_string(&create_test_config()),
            "TestCrawler/1.0 (+https://example.com/about; admin@example.com)"
        );
    }

    #[tokio::test]
    async fn test_invalid_url_is_fetch_error() {
        let fetcher = HttpFetcher::new(&create_test_config(), Duration::from_secs(1)).unwrap();
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[test]
    fn test_fetch_error_display() {
        let error = FetchError::Status {
            url: "https://moh.gov.gh/x".to_string(),
            status_code: 404,
        };
        assert_eq!(error.to_string(), "HTTP 404 for https://moh.gov.gh/x");
    }
}
