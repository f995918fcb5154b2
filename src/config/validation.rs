use crate::config::types::{Config, CrawlerConfig, GalleryEntry, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_galleries(&config.galleries)?;
    Ok(())
}

fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.max_pages == Some(0) {
        return Err(ConfigError::Validation(
            "max_pages must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Every gallery source must be an absolute http(s) URL with a host
fn validate_galleries(galleries: &[GalleryEntry]) -> Result<(), ConfigError> {
    if galleries.is_empty() {
        return Err(ConfigError::Validation(
            "at least one [[gallery]] entry is required".to_string(),
        ));
    }

    for entry in galleries {
        let url = Url::parse(&entry.source).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid gallery source '{}': {}", entry.source, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "Gallery source '{}' must use http or https",
                entry.source
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::InvalidUrl(format!(
                "Gallery source '{}' has no host",
                entry.source
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(source: &str) -> GalleryEntry {
        GalleryEntry {
            source: source.to_string(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_galleries() {
        assert!(validate_galleries(&[gallery("https://a.devpost.com/project-gallery")]).is_ok());
        assert!(validate_galleries(&[gallery("http://127.0.0.1:8080/gallery")]).is_ok());

        assert!(validate_galleries(&[]).is_err());
        assert!(validate_galleries(&[gallery("not a url")]).is_err());
        assert!(validate_galleries(&[gallery("ftp://a.devpost.com/")]).is_err());
    }

    #[test]
    fn test_validate_zero_max_pages() {
        let mut config = Config::default();
        config.crawler.max_pages = Some(0);
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));

        config.crawler.max_pages = Some(1);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_crawler_name() {
        let mut config = Config::default();
        config.user_agent.crawler_name = "bad name!".to_string();
        assert!(validate(&config).is_err());

        config.user_agent.crawler_name = String::new();
        assert!(validate(&config).is_err());

        config.user_agent.crawler_name = "gallery_bot-2".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.crawler.connect_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }
}
