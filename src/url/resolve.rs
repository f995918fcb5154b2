use url::Url;

/// Resolves an href against the page it was found on
///
/// Absolute hrefs come back unchanged. Returns `None` for empty hrefs,
/// fragment-only anchors, `javascript:`/`mailto:` links, and anything that does
/// not resolve to an http(s) URL.
pub fn resolve_href(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:") || href.starts_with("mailto:") {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url.to_string())
        }
        _ => None,
    }
}
