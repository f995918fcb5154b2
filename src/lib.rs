//! Devpost-Gallery: a project-gallery scraper
//!
//! This crate walks the paginated listing of a Devpost project gallery, extracts
//! the structured fields of every project detail page, and writes one CSV file
//! per gallery.

pub mod config;
pub mod crawler;
pub mod logger;
pub mod output;
pub mod project;
pub mod url;

use thiserror::Error;

/// Main error type for Devpost-Gallery operations
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Required element '{field}' missing on {url}")]
    MissingField { url: String, field: &'static str },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for Devpost-Gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{enumerate_project_urls, extract, HttpFetcher, PageSource};
pub use logger::Logger;
pub use project::{NarrativeSection, ProjectRecord};
