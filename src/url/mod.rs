//! URL handling module for Devpost-Gallery
//!
//! This module provides listing-page URL construction, href resolution and
//! derivation of per-gallery output file names.

mod domain;
mod resolve;

pub use domain::{extract_domain, output_stem};
pub use resolve::resolve_href;

/// Builds the URL of one page of a gallery listing
///
/// The page parameter is appended to the gallery URL as given; a base that
/// already carries a query string gets `&page=` instead of `?page=`.
///
/// # Examples
///
/// ```
/// use devpost_gallery::url::listing_page_url;
///
/// assert_eq!(
///     listing_page_url("https://x.devpost.com/project-gallery", 2),
///     "https://x.devpost.com/project-gallery?page=2"
/// );
/// ```
pub fn listing_page_url(gallery_base_url: &str, page: u32) -> String {
    let separator = if gallery_base_url.contains('?') {
        '&'
    } else {
        '?'
    };
    format!("{}{}page={}", gallery_base_url, separator, page)
}
