//! Domain entities

mod article;
mod category;
mod scraped_article;
mod user;

pub use article::Article;
pub use category::Category;
pub use scraped_article::ScrapedArticle;
pub use user::User;
