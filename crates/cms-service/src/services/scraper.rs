//! Scraper service
//!
//! Fetches configured external sources, extracts article links, and stores
//! new ones. A failing source never aborts the run; its error is reported in
//! the per-source results instead.

use std::time::Duration;

use cms_core::access::{can_trigger_scrape, Requester};
use cms_core::entities::ScrapedArticle;
use cms_core::DomainError;
use tracing::{info, instrument, warn};
use url::Url;

use crate::dto::{
    PageResponse, ScrapeRunResponse, ScrapeSourceResult, ScrapedArticleResponse,
    ScrapedEntryResponse,
};
use crate::scrape::{sources, ScrapeSource, ScrapedEntry};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Scraper service
pub struct ScraperService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScraperService<'a> {
    /// Create a new ScraperService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List stored scraped articles, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<PageResponse<ScrapedArticleResponse>> {
        let entries = self.ctx.scraped_article_repo().list(limit, offset).await?;
        let total = self.ctx.scraped_article_repo().count().await?;

        let results = entries.iter().map(ScrapedArticleResponse::from).collect();

        Ok(PageResponse::new(total, results, limit, offset))
    }

    /// The most recently scraped articles
    #[instrument(skip(self))]
    pub async fn latest(&self, limit: i64) -> ServiceResult<Vec<ScrapedArticleResponse>> {
        let entries = self.ctx.scraped_article_repo().latest(limit).await?;

        Ok(entries.iter().map(ScrapedArticleResponse::from).collect())
    }

    /// Run a scrape over all configured sources (admins only).
    ///
    /// `limit` caps the entries processed across all sources combined;
    /// without one the configured per-run default applies. Entries already
    /// stored under the same URL count as encountered but not new.
    #[instrument(skip(self, requester))]
    pub async fn run_scrape(
        &self,
        requester: &Requester,
        limit: Option<usize>,
    ) -> ServiceResult<ScrapeRunResponse> {
        if !requester.is_authenticated() {
            return Err(ServiceError::Domain(DomainError::AuthenticationRequired));
        }
        if !can_trigger_scrape(requester) {
            return Err(ServiceError::Domain(DomainError::AdminOnly));
        }

        let config = self.ctx.scraper_config();
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut remaining = limit.unwrap_or(config.max_entries);
        let mut run = ScrapeRunResponse {
            total_fetched: 0,
            total_stored: 0,
            sources: Vec::new(),
            articles: Vec::new(),
        };

        for source in sources() {
            if remaining == 0 {
                break;
            }

            let result = match self.scrape_source(&client, source, remaining).await {
                Ok((result, articles)) => {
                    run.articles.extend(articles);
                    result
                }
                Err(e) => {
                    warn!(source = source.name, error = %e, "Scrape source failed");
                    ScrapeSourceResult {
                        source: source.name.to_string(),
                        fetched: 0,
                        stored: 0,
                        error: Some(e.to_string()),
                    }
                }
            };

            remaining -= result.fetched.min(remaining);
            run.total_fetched += result.fetched;
            run.total_stored += result.stored;
            run.sources.push(result);
        }

        info!(
            total_fetched = run.total_fetched,
            total_stored = run.total_stored,
            "Scrape run finished"
        );

        Ok(run)
    }

    async fn scrape_source(
        &self,
        client: &reqwest::Client,
        source: &ScrapeSource,
        max_entries: usize,
    ) -> ServiceResult<(ScrapeSourceResult, Vec<ScrapedEntryResponse>)> {
        let entries = self.fetch_entries(client, source).await?;

        let mut stored = 0;
        let mut articles = Vec::new();

        for entry in entries.into_iter().take(max_entries) {
            let record = ScrapedArticle::new(
                self.ctx.generate_id(),
                entry.title,
                entry.url,
                source.name.to_string(),
            );

            let is_new = self.ctx.scraped_article_repo().upsert(&record).await?;
            if is_new {
                stored += 1;
            }
            articles.push(ScrapedEntryResponse {
                title: record.title,
                url: record.url,
                source: record.source,
                is_new,
            });
        }

        let fetched = articles.len();
        info!(source = source.name, fetched, stored, "Scraped source");

        Ok((
            ScrapeSourceResult {
                source: source.name.to_string(),
                fetched,
                stored,
                error: None,
            },
            articles,
        ))
    }

    async fn fetch_entries(
        &self,
        client: &reqwest::Client,
        source: &ScrapeSource,
    ) -> ServiceResult<Vec<ScrapedEntry>> {
        let base = Url::parse(source.url)
            .map_err(|e| DomainError::ScrapeError(format!("{}: {e}", source.name)))?;

        let response = client
            .get(source.url)
            .send()
            .await
            .map_err(|e| DomainError::ScrapeError(format!("{}: {e}", source.name)))?;

        let response = response
            .error_for_status()
            .map_err(|e| DomainError::ScrapeError(format!("{}: {e}", source.name)))?;

        let html = response
            .text()
            .await
            .map_err(|e| DomainError::ScrapeError(format!("{}: {e}", source.name)))?;

        Ok((source.extract)(&html, &base))
    }
}
