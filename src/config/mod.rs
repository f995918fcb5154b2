//! Configuration module for Devpost-Gallery
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! When no file is given, [`Config::default`] supplies the built-in gallery list.
//!
//! # Example
//!
//! ```no_run
//! use devpost_gallery::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("galleries.toml")).unwrap();
//! println!("Galleries to crawl: {}", config.galleries.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, GalleryEntry, LoggingConfig, OutputConfig, UserAgentConfig,
    DEFAULT_GALLERIES,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
