//! Detail page extraction
//!
//! Turns one project detail page into a [`ProjectRecord`]. Only the title and
//! headline are required; every other section may be missing and is then
//! recorded as absent.

use crate::crawler::fetcher::PageSource;
use crate::logger::Logger;
use crate::project::{Narrative, NarrativeSection, ProjectRecord};
use crate::{GalleryError, Result};
use scraper::{ElementRef, Html, Selector};

const TITLE_SELECTOR: &str = "h1#app-title";
const GALLERY_SELECTOR: &str = "div#gallery";
const HEADING_SELECTOR: &str = "h2";
const BUILT_WITH_SELECTOR: &str = "div#built-with";
const TAG_SELECTOR: &str = "span.cp-tag";
const APP_LINKS_SELECTOR: &str = "nav.app-links";

/// Media elements inside the gallery and the attribute holding their URL,
/// in the order they are collected
const MEDIA_SOURCES: [(&str, &str); 4] = [
    ("img", "src"),
    ("video", "src"),
    ("iframe", "src"),
    ("a", "href"),
];

/// Fetches a project page and extracts its record
///
/// # Errors
///
/// Fails on any fetch error and when the page has no title or headline.
pub async fn extract<S: PageSource>(
    source: &S,
    project_url: &str,
    logger: &Logger,
) -> Result<ProjectRecord> {
    let body = source.fetch(project_url).await?;
    let record = parse_project_page(&body, project_url)?;

    logger.log(format!("Project: {}", project_url));
    Ok(record)
}

/// Extracts a record from the HTML of a project page
///
/// # Arguments
///
/// * `html` - The detail page markup
/// * `page_url` - The page's URL, only used to label errors
///
/// # Returns
///
/// * `Ok(ProjectRecord)` - The fully built record
/// * `Err(GalleryError::MissingField)` - The page has no title or no headline
pub fn parse_project_page(html: &str, page_url: &str) -> Result<ProjectRecord> {
    let document = Html::parse_document(html);

    let title_element = select_first(document.root_element(), TITLE_SELECTOR)
        .ok_or_else(|| missing(page_url, "title"))?;
    let title: String = title_element.text().collect();

    let headline: String = next_sibling_named(title_element, "p")
        .ok_or_else(|| missing(page_url, "headline"))?
        .text()
        .collect();

    let (media, narrative) = match select_first(document.root_element(), GALLERY_SELECTOR) {
        Some(gallery) => {
            let narrative = next_sibling_named(gallery, "div")
                .map(|main_section| extract_narrative(main_section, &title))
                .unwrap_or_default();
            (Some(collect_media(gallery)), narrative)
        }
        None => (None, Narrative::default()),
    };

    let built_with = select_first(document.root_element(), BUILT_WITH_SELECTOR)
        .map(|list| select_all(list, TAG_SELECTOR).map(element_text).collect());

    let demos = select_first(document.root_element(), APP_LINKS_SELECTOR).map(|nav| {
        select_all(nav, "a")
            .filter_map(|link| link.value().attr("href"))
            .map(str::to_string)
            .collect()
    });

    Ok(ProjectRecord {
        title,
        headline,
        media,
        narrative,
        built_with,
        demos,
    })
}

/// Collects media URLs from the gallery: images, then videos, then embedded
/// frames, then plain links
fn collect_media(gallery: ElementRef<'_>) -> Vec<String> {
    MEDIA_SOURCES
        .into_iter()
        .flat_map(|(tag, attr)| {
            select_all(gallery, tag).filter_map(move |element| element.value().attr(attr))
        })
        .map(str::to_string)
        .collect()
}

/// Reads every narrative section found under the main content section
fn extract_narrative(main_section: ElementRef<'_>, title: &str) -> Narrative {
    let mut narrative = Narrative::default();

    for section in NarrativeSection::ALL {
        let label = section.label(title);
        let text = select_all(main_section, HEADING_SELECTOR)
            .find(|heading| element_text(*heading) == label)
            .map(read_paragraphs);
        narrative.set(section, text);
    }

    narrative
}

/// Concatenates the text of the paragraphs that follow `heading` in document
/// order, stopping at the first element that is not a `<p>`
fn read_paragraphs(heading: ElementRef<'_>) -> String {
    let mut text = String::new();
    let mut current = heading;

    while let Some(next) = next_element(current) {
        if next.value().name() != "p" {
            break;
        }
        text.extend(next.text());
        current = next;
    }

    text
}

/// Returns the first element after `element` in document order
///
/// This is a pre-order walk: the element's own children come first, so an
/// inline `<a>` inside a paragraph is the paragraph's next element.
fn next_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let node = *element;
    node.descendants()
        .skip(1)
        .find_map(ElementRef::wrap)
        .or_else(|| {
            std::iter::once(node)
                .chain(node.ancestors())
                .flat_map(|ancestor| ancestor.next_siblings())
                .find_map(|sibling| sibling.descendants().find_map(ElementRef::wrap))
        })
}

/// Returns the first following sibling of `element` with the given tag name
fn next_sibling_named<'a>(element: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    let node = *element;
    node.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == name)
}

fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    select_all(scope, css).next()
}

fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> impl Iterator<Item = ElementRef<'a>> {
    let selector = Selector::parse(css).ok();
    let matches: Vec<ElementRef<'a>> = match &selector {
        Some(selector) => scope.select(selector).collect(),
        None => Vec::new(),
    };
    matches.into_iter()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn missing(page_url: &str, field: &'static str) -> GalleryError {
    GalleryError::MissingField {
        url: page_url.to_string(),
        field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://devpost.com/software/foo";

    fn page(gallery: &str, main: &str, trailer: &str) -> String {
        format!(
            r#"<html><body>
            <div id="app-details-left">
                <header>
                    <h1 id="app-title">Foo</h1>
                    <p class="large">A tool that does foo.</p>
                </header>
                {}{}
            </div>
            {}
            </body></html>"#,
            gallery, main, trailer
        )
    }

    const GALLERY: &str = r#"<div id="gallery">
        <ul>
            <li><a href="https://img.example/full.png"><img src="https://img.example/thumb.png"></a></li>
            <li><iframe src="https://www.youtube.com/embed/abc"></iframe></li>
            <li><video src="https://cdn.example/demo.mp4"></video></li>
        </ul>
    </div>"#;

    #[test]
    fn test_title_and_headline() {
        let record = parse_project_page(&page("", "", ""), URL).unwrap();
        assert_eq!(record.title, "Foo");
        assert_eq!(record.headline, "A tool that does foo.");
    }

    #[test]
    fn test_missing_title_is_error() {
        let html = "<html><body><h1>Foo</h1><p>headline</p></body></html>";
        match parse_project_page(html, URL) {
            Err(GalleryError::MissingField { field, url }) => {
                assert_eq!(field, "title");
                assert_eq!(url, URL);
            }
            other => panic!("expected missing title, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_headline_is_error() {
        let html = r#"<html><body><h1 id="app-title">Foo</h1></body></html>"#;
        assert!(matches!(
            parse_project_page(html, URL),
            Err(GalleryError::MissingField { field: "headline", .. })
        ));
    }

    #[test]
    fn test_media_scan_order() {
        let main = "<div><h2>Inspiration</h2><p>x</p></div>";
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert_eq!(
            record.media,
            Some(vec![
                "https://img.example/thumb.png".to_string(),
                "https://cdn.example/demo.mp4".to_string(),
                "https://www.youtube.com/embed/abc".to_string(),
                "https://img.example/full.png".to_string(),
            ])
        );
    }

    #[test]
    fn test_paragraphs_concatenated_until_next_heading() {
        let main = r#"<div>
            <h2>Inspiration</h2>
            <p>A.</p>
            <p>B.</p>
            <h2>What it does</h2>
            <p>Does things.</p>
        </div>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert_eq!(record.narrative.inspiration.as_deref(), Some("A.B."));
        assert_eq!(record.narrative.what_it_does.as_deref(), Some("Does things."));
    }

    #[test]
    fn test_all_labels_recognised() {
        let main = r#"<div>
            <h2>Inspiration</h2><p>1</p>
            <h2>What it does</h2><p>2</p>
            <h2>How we built it</h2><p>3</p>
            <h2>Challenges we ran into</h2><p>4</p>
            <h2>Accomplishments that we're proud of</h2><p>5</p>
            <h2>What we learned</h2><p>6</p>
            <h2>What's next for Foo</h2><p>7</p>
        </div>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        let texts: Vec<Option<&str>> = NarrativeSection::ALL
            .iter()
            .map(|section| record.narrative.get(*section))
            .collect();
        assert_eq!(
            texts,
            vec![
                Some("1"),
                Some("2"),
                Some("3"),
                Some("4"),
                Some("5"),
                Some("6"),
                Some("7")
            ]
        );
    }

    #[test]
    fn test_heading_without_paragraphs_is_empty_string() {
        let main = r#"<div><h2>What we learned</h2><h2>Inspiration</h2><p>x</p></div>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert_eq!(record.narrative.lessons.as_deref(), Some(""));
        assert_eq!(record.narrative.inspiration.as_deref(), Some("x"));
        assert_eq!(record.narrative.challenges, None);
    }

    #[test]
    fn test_inline_markup_ends_paragraph_walk() {
        let main = r#"<div><h2>How we built it</h2><p>We used <a href="/x">Rust</a>.</p><p>Second.</p><h2>Inspiration</h2><p>x</p></div>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert_eq!(
            record.narrative.how_we_built_it.as_deref(),
            Some("We used Rust.")
        );
    }

    #[test]
    fn test_heading_with_inline_child_reads_nothing() {
        let main = r#"<div><h2><strong>Inspiration</strong></h2><p>skipped</p></div>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert_eq!(record.narrative.inspiration.as_deref(), Some(""));
    }

    #[test]
    fn test_paragraph_walk_continues_past_main_section() {
        let main = r#"<div><h2>What we learned</h2><p>One.</p><p>Two.</p></div><p>Outside.</p>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert_eq!(record.narrative.lessons.as_deref(), Some("One.Two.Outside."));
    }

    #[test]
    fn test_whats_next_label_uses_exact_title() {
        let main = r#"<div><h2>What's next for foo</h2><p>lowercase</p></div>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert_eq!(record.narrative.whats_next, None);

        let main = r#"<div><h2>What's next for Foo</h2><p>more foo</p></div>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert_eq!(record.narrative.whats_next.as_deref(), Some("more foo"));
    }

    #[test]
    fn test_heading_text_drift_is_absent() {
        let main = r#"<div>
            <h2> Inspiration</h2><p>padded</p>
            <h2>what it does</h2><p>lowercase</p>
            <h2>Accomplishments that we’re proud of</h2><p>curly apostrophe</p>
        </div>"#;
        let record = parse_project_page(&page(GALLERY, main, ""), URL).unwrap();
        assert!(record.narrative.is_empty());
        assert!(record.media.is_some());
    }

    #[test]
    fn test_absent_gallery_clears_media_and_narrative() {
        let main = r#"<div><h2>Inspiration</h2><p>ignored</p></div>"#;
        let trailer = r#"
            <div id="built-with"><ul><li><span class="cp-tag">Rust</span></li></ul></div>
            <nav class="app-links"><ul><li><a href="https://github.com/x/foo">GitHub</a></li></ul></nav>
        "#;
        let record = parse_project_page(&page("", main, trailer), URL).unwrap();

        assert_eq!(record.media, None);
        assert!(record.narrative.is_empty());
        assert_eq!(record.built_with, Some(vec!["Rust".to_string()]));
        assert_eq!(record.demos, Some(vec!["https://github.com/x/foo".to_string()]));
    }

    #[test]
    fn test_gallery_without_main_section() {
        let record = parse_project_page(&page(GALLERY, "", ""), URL).unwrap();
        assert_eq!(record.media.as_ref().map(Vec::len), Some(4));
        assert!(record.narrative.is_empty());
    }

    #[test]
    fn test_built_with_and_demos() {
        let trailer = r#"
            <div id="built-with">
                <ul>
                    <li><span class="cp-tag">Python</span></li>
                    <li><span class="cp-tag recognized-tag"><a href="/software/built-with/react">React</a></span></li>
                    <li><span class="other">ignored</span></li>
                </ul>
            </div>
            <nav class="app-links">
                <ul>
                    <li><a href="https://foo.example">Try it out</a></li>
                    <li><a href="https://github.com/x/foo">GitHub Repo</a></li>
                </ul>
            </nav>
        "#;
        let record = parse_project_page(&page("", "", trailer), URL).unwrap();
        assert_eq!(
            record.built_with,
            Some(vec!["Python".to_string(), "React".to_string()])
        );
        assert_eq!(
            record.demos,
            Some(vec![
                "https://foo.example".to_string(),
                "https://github.com/x/foo".to_string()
            ])
        );
    }

    #[test]
    fn test_optional_blocks_absent() {
        let record = parse_project_page(&page("", "", ""), URL).unwrap();
        assert_eq!(record.built_with, None);
        assert_eq!(record.demos, None);
    }

    #[test]
    fn test_empty_built_with_list_is_present() {
        let trailer = r#"<div id="built-with"></div>"#;
        let record = parse_project_page(&page("", "", trailer), URL).unwrap();
        assert_eq!(record.built_with, Some(vec![]));
    }
}
