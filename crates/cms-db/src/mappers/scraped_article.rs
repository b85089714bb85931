//! Scraped article entity <-> model mapper

use cms_core::entities::ScrapedArticle;
use cms_core::value_objects::Snowflake;

use crate::models::ScrapedArticleModel;

/// Convert ScrapedArticleModel to ScrapedArticle entity
impl From<ScrapedArticleModel> for ScrapedArticle {
    fn from(model: ScrapedArticleModel) -> Self {
        ScrapedArticle {
            id: Snowflake::new(model.id),
            title: model.title,
            url: model.url,
            source: model.source,
            scraped_at: model.scraped_at,
        }
    }
}
