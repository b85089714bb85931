//! Value objects - immutable domain primitives

mod role;
mod slug;
mod snowflake;
mod status;

pub use role::Role;
pub use slug::slugify;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use status::ArticleStatus;
