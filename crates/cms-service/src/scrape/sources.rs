//! Source definitions and HTML extraction
//!
//! Extraction functions are pure: HTML in, entries out. Relative links are
//! resolved against the source's base URL; entries without a title or a
//! resolvable link are skipped.

use scraper::{Html, Selector};
use url::Url;

use super::{ScrapeSource, ScrapedEntry};

/// All configured sources, scraped in order
pub fn sources() -> &'static [ScrapeSource] {
    &[
        ScrapeSource {
            name: "hacker-news",
            url: "https://news.ycombinator.com",
            extract: extract_hacker_news,
        },
        ScrapeSource {
            name: "dev.to",
            url: "https://dev.to",
            extract: extract_devto,
        },
    ]
}

/// Extract story links from the Hacker News front page.
///
/// Stories live in `span.titleline`, whose first anchor is the story link.
pub fn extract_hacker_news(html: &str, base: &Url) -> Vec<ScrapedEntry> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("span.titleline").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    let mut entries = Vec::new();
    for titleline in document.select(&title_selector) {
        let Some(link) = titleline.select(&link_selector).next() else {
            continue;
        };

        let title = link.text().collect::<Vec<_>>().join(" ").trim().to_string();
        if title.is_empty() {
            continue;
        }

        if let Some(href) = link.value().attr("href") {
            if let Ok(resolved) = base.join(href) {
                entries.push(ScrapedEntry {
                    title,
                    url: resolved.to_string(),
                });
            }
        }
    }

    entries
}

/// Extract article links from the dev.to front page.
///
/// Articles are `article.crayons-story` cards with the link inside the
/// story title heading.
pub fn extract_devto(html: &str, base: &Url) -> Vec<ScrapedEntry> {
    let document = Html::parse_document(html);
    let story_selector = Selector::parse("article.crayons-story").unwrap();
    let link_selector =
        Selector::parse("h2.crayons-story__title a, h3.crayons-story__title a").unwrap();

    let mut entries = Vec::new();
    for story in document.select(&story_selector) {
        let Some(link) = story.select(&link_selector).next() else {
            continue;
        };

        let title = link.text().collect::<Vec<_>>().join(" ").trim().to_string();
        if title.is_empty() {
            continue;
        }

        if let Some(href) = link.value().attr("href") {
            if let Ok(resolved) = base.join(href) {
                entries.push(ScrapedEntry {
                    title,
                    url: resolved.to_string(),
                });
            }
        }
    }

    entries
}
