//! Entity to model mappers
//!
//! This module provides conversions between domain entities (cms-core) and database models.
//! `From<Model> for Entity` converts database rows to domain objects; enum-typed
//! columns are stored as text and guarded by CHECK constraints.

mod article;
mod category;
mod scraped_article;
mod user;

pub use article::record_from_row;
