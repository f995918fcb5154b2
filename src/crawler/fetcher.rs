//! HTTP fetcher implementation
//!
//! All page downloads go through the [`PageSource`] trait. The production
//! implementation is [`HttpFetcher`]; tests substitute in-memory sources.
//! There is no retry: any transport failure or non-success status ends the run.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::{GalleryError, Result};
use reqwest::Client;
use std::time::Duration;

/// Something that can return the body of a page as text
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetches `url` and returns the response body
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Builds an HTTP client with the configured user agent and timeouts
///
/// # Example
///
/// ```no_run
/// use devpost_gallery::config::{CrawlerConfig, UserAgentConfig};
/// use devpost_gallery::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> std::result::Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version
    let user_agent = format!("{}/{}", user_agent.crawler_name, user_agent.crawler_version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over HTTP with plain GET requests
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from configuration
    pub fn from_config(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> std::result::Result<Self, reqwest::Error> {
        build_http_client(user_agent, crawler).map(Self::new)
    }
}

impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let to_error = |source: reqwest::Error| GalleryError::Http {
            url: url.to_string(),
            source,
        };

        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(to_error)?;
        let status = response.status();
        let response = response.error_for_status().map_err(to_error)?;
        let body = response.text().await.map_err(to_error)?;

        tracing::debug!("{} {} ({} bytes)", status.as_u16(), url, body.len());

        Ok(body)
    }
}
