//! User roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role. Assigned at registration and never changed through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Author,
}

impl Role {
    /// Stable string form used in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Author => "author",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "author" => Ok(Self::Author),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Error when parsing a role from its database representation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_author() {
        assert_eq!(Role::default(), Role::Author);
    }

    #[test]
    fn test_roundtrip() {
        for role in [Role::Admin, Role::Author] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!("editor".parse::<Role>().is_err());
    }

    #[test]
    fn test_json_form() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"author\"").unwrap();
        assert_eq!(role, Role::Author);
    }
}
