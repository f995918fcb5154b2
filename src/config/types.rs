use serde::Deserialize;
use std::path::PathBuf;

/// Galleries crawled when no configuration file is supplied
pub const DEFAULT_GALLERIES: [&str; 3] = [
    "https://deishacks2021.devpost.com/project-gallery",
    "https://deishacks2022.devpost.com/project-gallery",
    "https://deis-hacks-2020.devpost.com/project-gallery",
];

/// Main configuration structure for Devpost-Gallery
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(rename = "gallery", default)]
    pub galleries: Vec<GalleryEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            galleries: DEFAULT_GALLERIES
                .iter()
                .map(|source| GalleryEntry {
                    source: source.to_string(),
                })
                .collect(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Upper bound on listing pages fetched per gallery.
    /// `None` walks until a page comes back without project links.
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<u32>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            max_pages: None,
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
        }
    }
}

fn default_crawler_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the per-gallery CSV files are written into
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

/// Progress logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Whether `[LOG]` progress lines are emitted
    #[serde(default = "default_logging_active")]
    pub active: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            active: default_logging_active(),
        }
    }
}

fn default_logging_active() -> bool {
    true
}

/// One gallery to crawl
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryEntry {
    /// Gallery root URL, e.g. `https://example.devpost.com/project-gallery`
    pub source: String,
}
