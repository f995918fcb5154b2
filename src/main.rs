//! Devpost-Gallery main entry point
//!
//! This is the command-line interface for the Devpost-Gallery scraper.

use anyhow::Context;
use clap::Parser;
use devpost_gallery::config::{load_config_with_hash, Config};
use devpost_gallery::crawler::crawl;
use devpost_gallery::output::output_path;
use devpost_gallery::Logger;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Devpost-Gallery: a project-gallery scraper
///
/// Walks each configured Devpost project gallery, extracts every project's
/// write-up, and writes one CSV file per gallery.
#[derive(Parser, Debug)]
#[command(name = "devpost-gallery")]
#[command(version)]
#[command(about = "Scrapes Devpost project galleries into CSV files", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in gallery list when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress everything but errors, including progress lines
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the galleries and output files without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration and runs the selected mode
///
/// Errors are returned, not logged; `main` reports them once.
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using built-in galleries");
            Config::default()
        }
    };

    if cli.dry_run {
        return handle_dry_run(&config);
    }

    let logger = Logger::new(config.logging.active && !cli.quiet);
    handle_crawl(config, logger).await
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("devpost_gallery=info,warn"),
            1 => EnvFilter::new("devpost_gallery=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(verbose > 0)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Devpost-Gallery Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);
    println!("  Connect timeout: {}s", config.crawler.connect_timeout_secs);
    match config.crawler.max_pages {
        Some(limit) => println!("  Max listing pages: {}", limit),
        None => println!("  Max listing pages: unbounded"),
    }

    println!(
        "\nUser Agent: {}/{}",
        config.user_agent.crawler_name, config.user_agent.crawler_version
    );

    println!("\nGalleries ({}):", config.galleries.len());
    for gallery in &config.galleries {
        let path = output_path(&config.output.directory, &gallery.source)?;
        println!("  - {} -> {}", gallery.source, path.display());
    }

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config, logger: Logger) -> anyhow::Result<()> {
    tracing::info!("Galleries: {}", config.galleries.len());

    let reports = crawl(config, logger).await.context("Crawl failed")?;

    let total: usize = reports.iter().map(|r| r.projects).sum();
    tracing::info!(
        "Crawl completed successfully: {} projects in {} files",
        total,
        reports.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use devpost_gallery::ConfigError;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["devpost-gallery", "-q", "-v"]).is_err());
    }

    #[tokio::test]
    async fn test_config_error_is_returned() {
        let cli = Cli::try_parse_from(["devpost-gallery", "/nonexistent/galleries.toml"]).unwrap();

        let err = run(cli).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/galleries.toml"));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_dry_run_fetches_nothing() {
        let cli = Cli::try_parse_from(["devpost-gallery", "--dry-run"]).unwrap();
        assert!(run(cli).await.is_ok());
    }
}
