mod repositories;

pub use repositories::{
    ArticleOrdering, ArticleQuery, ArticleRecord, ArticleRepository, CategoryQuery,
    CategoryRepository, OrderDirection, RepoResult, ScrapedArticleRepository, UserRepository,
};
