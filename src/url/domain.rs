use crate::{UrlError, UrlResult};
use url::Url;

/// Extracts the lowercase host from a URL
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Derives the output file stem for a gallery source
///
/// The protocol is stripped and the host is cut at its first dot, so
/// `https://deishacks2021.devpost.com/project-gallery` becomes `deishacks2021`.
///
/// # Examples
///
/// ```
/// use devpost_gallery::url::output_stem;
///
/// let stem = output_stem("https://deis-hacks-2020.devpost.com/project-gallery").unwrap();
/// assert_eq!(stem, "deis-hacks-2020");
/// ```
pub fn output_stem(source: &str) -> UrlResult<String> {
    let url = Url::parse(source).map_err(|e| UrlError::Parse(format!("{}: {}", source, e)))?;
    let host = extract_domain(&url).ok_or_else(|| UrlError::MissingHost(source.to_string()))?;

    match host.split('.').next() {
        Some(stem) if !stem.is_empty() => Ok(stem.to_string()),
        _ => Err(UrlError::MissingHost(source.to_string())),
    }
}
