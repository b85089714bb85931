//! Article entity - the primary content unit

use chrono::{DateTime, Utc};

use crate::value_objects::{slugify, ArticleStatus, Snowflake};

/// Authored content. The author is set once at creation and never reassigned;
/// the slug tracks the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: Snowflake,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub category_id: Snowflake,
    pub author_id: Snowflake,
    pub status: ArticleStatus,
    pub featured_image: Option<String>,
    pub views_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new draft-or-published Article owned by `author_id`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        title: String,
        description: String,
        content: String,
        category_id: Snowflake,
        author_id: Snowflake,
        status: ArticleStatus,
        featured_image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let slug = slugify(&title);
        Self {
            id,
            title,
            slug,
            description,
            content,
            category_id,
            author_id,
            status,
            featured_image,
            views_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the title, regenerating the slug.
    pub fn retitle(&mut self, title: String) {
        self.slug = slugify(&title);
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Whether `user_id` owns this article.
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::new(
            Snowflake::new(10),
            "First Post".to_string(),
            "desc".to_string(),
            "body".to_string(),
            Snowflake::new(1),
            Snowflake::new(2),
            ArticleStatus::Draft,
            None,
        )
    }

    #[test]
    fn test_new_article_defaults() {
        let a = article();
        assert_eq!(a.slug, "first-post");
        assert_eq!(a.views_count, 0);
        assert_eq!(a.status, ArticleStatus::Draft);
    }

    #[test]
    fn test_retitle_regenerates_slug() {
        let mut a = article();
        a.retitle("Second Post!".to_string());
        assert_eq!(a.slug, "second-post");
    }

    #[test]
    fn test_ownership() {
        let a = article();
        assert!(a.is_authored_by(Snowflake::new(2)));
        assert!(!a.is_authored_by(Snowflake::new(3)));
    }
}
