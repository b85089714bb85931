//! # cms-core
//!
//! Domain layer containing entities, value objects, access rules, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod access;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use access::{ArticleScope, Requester};
pub use entities::{Article, Category, ScrapedArticle, User};
pub use error::DomainError;
pub use traits::{
    ArticleOrdering, ArticleQuery, ArticleRecord, ArticleRepository, CategoryQuery,
    CategoryRepository, OrderDirection, RepoResult, ScrapedArticleRepository, UserRepository,
};
pub use value_objects::{
    slugify, ArticleStatus, Role, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};
