//! HTTP request handlers
//!
//! Handlers are thin: they extract and validate input, call the matching
//! service, and shape the response.

pub mod articles;
pub mod auth;
pub mod categories;
pub mod health;
pub mod scraper;
pub mod users;
