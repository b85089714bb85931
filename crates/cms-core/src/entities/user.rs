//! User entity - an account with a role

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, Snowflake};

/// User account. The role is fixed at creation; only superuser bootstrap
/// tooling can produce `is_superuser` accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub is_superuser: bool,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            role,
            is_superuser: false,
            bio: None,
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Admin capability: explicit admin role or superuser flag
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin || self.is_superuser
    }

    /// Author capability
    #[inline]
    pub fn is_author(&self) -> bool {
        self.role == Role::Author
    }
}
