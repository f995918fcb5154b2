//! Crawler module for gallery walking and project extraction
//!
//! This module contains the crawling logic, including:
//! - HTTP fetching behind the `PageSource` seam
//! - Listing page walking
//! - Detail page extraction
//! - Per-gallery coordination and output

mod coordinator;
mod detail;
mod fetcher;
mod listing;

pub use coordinator::{run_crawl, Coordinator, GalleryReport};
pub use detail::{extract, parse_project_page};
pub use fetcher::{build_http_client, HttpFetcher, PageSource};
pub use listing::{enumerate_project_urls, extract_project_links, parse_listing_page, ListingPage};

use crate::config::Config;
use crate::logger::Logger;
use crate::GalleryError;

/// Runs a complete crawl operation
///
/// Galleries are processed one after another. For each, every listing page is
/// walked, every project page is extracted, and the records are written to
/// `<output dir>/<gallery host stem>.csv`. The first error stops the run.
pub async fn crawl(config: Config, logger: Logger) -> Result<Vec<GalleryReport>, GalleryError> {
    run_crawl(config, logger).await
}
