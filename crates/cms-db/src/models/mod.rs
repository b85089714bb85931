//! Database models - SQLx-compatible structs for PostgreSQL tables

mod article;
mod category;
mod scraped_article;
mod user;

pub use article::{ArticleModel, ArticleRecordRow};
pub use category::{CategoryCountModel, CategoryModel};
pub use scraped_article::ScrapedArticleModel;
pub use user::UserModel;
