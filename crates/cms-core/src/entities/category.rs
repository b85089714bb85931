//! Category entity - a named, slugged taxonomy node

use chrono::{DateTime, Utc};

use crate::value_objects::{slugify, Snowflake};

/// Content category. Globally shared; only admins may mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new Category; the slug is derived from the name.
    pub fn new(id: Snowflake, name: String, description: String) -> Self {
        let now = Utc::now();
        let slug = slugify(&name);
        Self {
            id,
            name,
            slug,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the category, regenerating the slug.
    pub fn rename(&mut self, name: String) {
        self.slug = slugify(&name);
        self.name = name;
        self.updated_at = Utc::now();
    }
}
