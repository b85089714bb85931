//! Article publication status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication lifecycle of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    /// Stable string form used in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Error when parsing an article status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown article status: {0}")]
pub struct StatusParseError(pub String);
