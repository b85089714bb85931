//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in cms-core.
//! Each repository handles database operations for a specific domain entity.

mod article;
mod category;
mod error;
mod scraped_article;
mod user;

pub use article::PgArticleRepository;
pub use category::PgCategoryRepository;
pub use scraped_article::PgScrapedArticleRepository;
pub use user::PgUserRepository;

/// Build an ILIKE pattern that matches the search text literally.
/// `%`, `_`, and `\` are pattern metacharacters and must be escaped.
pub(crate) fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
