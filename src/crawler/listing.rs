//! Listing walker
//!
//! Walks `<gallery>?page=1`, `?page=2`, ... collecting project links until a
//! page comes back without any. The empty page is still fetched; it is what
//! ends the walk.

use crate::crawler::fetcher::PageSource;
use crate::logger::Logger;
use crate::url::{listing_page_url, resolve_href};
use crate::Result;
use scraper::{Html, Selector};
use url::Url;

/// CSS selector for the project links on a listing page
const PROJECT_LINK_SELECTOR: &str = "a.link-to-software";

/// Collects the detail page URLs of every project in a gallery
///
/// Pages are requested one at a time starting from 1. The first page without
/// project links stops the walk; URLs from earlier pages are returned in
/// listing order.
///
/// With `max_pages` set to `None` the walk has no upper bound: a listing
/// endpoint that never returns an empty page is walked forever. With a cap,
/// the walk stops after that many pages and returns what it has.
///
/// # Arguments
///
/// * `source` - Where listing pages are fetched from
/// * `gallery_base_url` - Gallery root; `?page=N` is appended per page
/// * `max_pages` - Optional cap on the number of listing pages
/// * `logger` - Progress logger
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Project detail URLs from every non-empty page
/// * `Err(GalleryError)` - A listing page could not be fetched
///
/// # Errors
///
/// Any fetch failure aborts the walk and is returned as is.
pub async fn enumerate_project_urls<S: PageSource>(
    source: &S,
    gallery_base_url: &str,
    max_pages: Option<u32>,
    logger: &Logger,
) -> Result<Vec<String>> {
    logger.log("Getting project urls");

    let mut urls = Vec::new();
    let mut page = 1;

    loop {
        if let Some(limit) = max_pages {
            if page > limit {
                tracing::warn!(
                    "Stopped walking {} after {} pages without reaching an empty page",
                    gallery_base_url,
                    limit
                );
                break;
            }
        }

        let page_url = listing_page_url(gallery_base_url, page);
        let body = source.fetch(&page_url).await?;
        let listing = parse_listing_page(&body, &page_url);

        tracing::debug!(
            "Listing page {} has {} project links ({} usable)",
            page,
            listing.anchors,
            listing.urls.len()
        );

        if listing.anchors == 0 {
            break;
        }

        urls.extend(listing.urls);
        page += 1;
    }

    tracing::debug!("Urls: {:?}", urls);
    logger.log(format!("Urls: {}", urls.len()));
    Ok(urls)
}

/// Project links found on one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Number of project link anchors on the page, usable or not
    pub anchors: usize,
    /// Resolved targets of the anchors that have a usable href
    pub urls: Vec<String>,
}

/// Parses one listing page
///
/// Every project link anchor counts towards `anchors`; only hrefs that
/// resolve against `page_url` end up in `urls`.
pub fn parse_listing_page(html: &str, page_url: &str) -> ListingPage {
    let document = Html::parse_document(html);
    let base_url = Url::parse(page_url).ok();

    let Ok(selector) = Selector::parse(PROJECT_LINK_SELECTOR) else {
        return ListingPage::default();
    };

    let mut page = ListingPage::default();
    for element in document.select(&selector) {
        page.anchors += 1;

        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let resolved = match &base_url {
            Some(base) => resolve_href(href, base),
            None => Some(href.to_string()),
        };
        page.urls.extend(resolved);
    }

    page
}

/// Extracts the resolved project link targets from one listing page
pub fn extract_project_links(html: &str, page_url: &str) -> Vec<String> {
    parse_listing_page(html, page_url).urls
}
