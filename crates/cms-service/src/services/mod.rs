//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod article;
pub mod auth;
pub mod category;
pub mod context;
pub mod error;
pub mod scraper;
pub mod user;

// Re-export all services for convenience
pub use article::ArticleService;
pub use auth::AuthService;
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use scraper::ScraperService;
pub use user::UserService;
