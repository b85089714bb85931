//! Web scraping for external article feeds
//!
//! Each source pairs an index URL with a pure extraction function over the
//! fetched HTML, so parsing stays testable without network access. Fetching
//! happens in [`crate::services::ScraperService`].

pub mod sources;

use url::Url;

pub use sources::sources;

/// A title/link pair extracted from a source's index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedEntry {
    pub title: String,
    pub url: String,
}

/// A scrapeable news source
pub struct ScrapeSource {
    /// Stable source name stored alongside each entry
    pub name: &'static str,
    /// Index page to fetch
    pub url: &'static str,
    /// Extract entries from the index page HTML
    pub extract: fn(&str, &Url) -> Vec<ScrapedEntry>,
}

impl std::fmt::Debug for ScrapeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapeSource")
            .field("name", &self.name)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
