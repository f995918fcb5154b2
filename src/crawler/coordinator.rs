//! Crawler coordinator - per-gallery orchestration
//!
//! For each configured gallery the coordinator walks the listing, extracts
//! every project page in listing order, and hands the finished batch to the
//! CSV writer.

use crate::config::Config;
use crate::crawler::detail::extract;
use crate::crawler::fetcher::{HttpFetcher, PageSource};
use crate::crawler::listing::enumerate_project_urls;
use crate::logger::Logger;
use crate::output::{output_path, write_records};
use crate::project::ProjectRecord;
use crate::GalleryError;
use std::path::PathBuf;

/// Outcome of crawling one gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryReport {
    /// Gallery root URL
    pub source: String,
    /// File the records were written to
    pub path: PathBuf,
    /// Number of records written
    pub projects: usize,
}

/// Main crawler coordinator structure
pub struct Coordinator<S: PageSource = HttpFetcher> {
    config: Config,
    source: S,
    logger: Logger,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that fetches over HTTP
    pub fn new(config: Config, logger: Logger) -> Result<Self, GalleryError> {
        let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
        Ok(Self::with_source(config, fetcher, logger))
    }
}

impl<S: PageSource> Coordinator<S> {
    /// Creates a coordinator over any page source
    pub fn with_source(config: Config, source: S, logger: Logger) -> Self {
        Self {
            config,
            source,
            logger,
        }
    }

    /// Crawls every configured gallery in order
    pub async fn run(&self) -> Result<Vec<GalleryReport>, GalleryError> {
        let mut reports = Vec::with_capacity(self.config.galleries.len());

        for gallery in &self.config.galleries {
            reports.push(self.crawl_gallery(&gallery.source).await?);
        }

        Ok(reports)
    }

    /// Crawls one gallery and writes its CSV file
    pub async fn crawl_gallery(&self, gallery_source: &str) -> Result<GalleryReport, GalleryError> {
        let path = output_path(&self.config.output.directory, gallery_source)?;
        self.logger.log(format!("File: {}", path.display()));

        let records = self.collect_records(gallery_source).await?;

        self.logger.log("Writing projects");
        write_records(&path, &records)?;

        tracing::info!(
            "Wrote {} projects from {} to {}",
            records.len(),
            gallery_source,
            path.display()
        );

        Ok(GalleryReport {
            source: gallery_source.to_string(),
            path,
            projects: records.len(),
        })
    }

    /// Walks the listing and extracts every project it links to
    pub async fn collect_records(
        &self,
        gallery_source: &str,
    ) -> Result<Vec<ProjectRecord>, GalleryError> {
        let urls = enumerate_project_urls(
            &self.source,
            gallery_source,
            self.config.crawler.max_pages,
            &self.logger,
        )
        .await?;

        let mut records = Vec::with_capacity(urls.len());
        for url in &urls {
            records.push(extract(&self.source, url, &self.logger).await?);
        }

        Ok(records)
    }
}

/// Builds an HTTP coordinator and runs it over every configured gallery
pub async fn run_crawl(config: Config, logger: Logger) -> Result<Vec<GalleryReport>, GalleryError> {
    Coordinator::new(config, logger)?.run().await
}
