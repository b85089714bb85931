//! Access rules - who may read and write what
//!
//! The resolver is a set of pure functions over an explicit [`Requester`]
//! value. Handlers construct the requester from the authenticated user (or
//! lack of one) and thread it into every service call; there is no implicit
//! request-scoped user state anywhere below the HTTP layer.

use crate::entities::{Article, User};
use crate::value_objects::{Role, Snowflake};

/// Identity and capabilities of the caller of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requester {
    /// No valid credentials were presented.
    Anonymous,
    /// An authenticated account.
    Known {
        id: Snowflake,
        role: Role,
        is_superuser: bool,
    },
}

impl Requester {
    /// Build a requester from a loaded user account.
    pub fn from_user(user: &User) -> Self {
        Self::Known {
            id: user.id,
            role: user.role,
            is_superuser: user.is_superuser,
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Known { .. })
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::Known { role: Role::Admin, .. } | Self::Known { is_superuser: true, .. }
        )
    }

    /// The account ID, if authenticated.
    #[inline]
    pub fn user_id(&self) -> Option<Snowflake> {
        match self {
            Self::Known { id, .. } => Some(*id),
            Self::Anonymous => None,
        }
    }
}

/// The set of articles a requester may read through list/query endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleScope {
    /// Only published articles.
    PublishedOnly,
    /// Everything (admin).
    All,
    /// The requester's own articles, in any status, plus everyone's
    /// published articles.
    OwnOrPublished(Snowflake),
}

/// Resolve the read scope for articles.
///
/// Anonymous requesters see published articles; admins see everything; any
/// other authenticated account sees the union of its own articles and the
/// published set. Own drafts stay visible to their author.
pub fn article_scope(requester: &Requester) -> ArticleScope {
    match requester {
        Requester::Anonymous => ArticleScope::PublishedOnly,
        Requester::Known { id, .. } => {
            if requester.is_admin() {
                ArticleScope::All
            } else {
                ArticleScope::OwnOrPublished(*id)
            }
        }
    }
}

/// Whether the requester may create, update, or delete categories.
/// Reads are open to everyone and never consult this.
pub fn can_modify_categories(requester: &Requester) -> bool {
    requester.is_admin()
}

/// Whether the requester may update or delete a specific article.
///
/// Object-level rule, independent of the list scope: the article's author and
/// admins only. Callers decide between 403 and 404 based on whether the
/// article was reachable through the requester's scope in the first place.
pub fn can_modify_article(requester: &Requester, article: &Article) -> bool {
    match requester {
        Requester::Anonymous => false,
        Requester::Known { id, .. } => requester.is_admin() || article.is_authored_by(*id),
    }
}

/// Whether the requester may trigger a scrape run.
pub fn can_trigger_scrape(requester: &Requester) -> bool {
    requester.is_admin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Article;
    use crate::value_objects::ArticleStatus;

    fn known(id: i64, role: Role) -> Requester {
        Requester::Known {
            id: Snowflake::new(id),
            role,
            is_superuser: false,
        }
    }

    fn superuser(id: i64) -> Requester {
        Requester::Known {
            id: Snowflake::new(id),
            role: Role::Author,
            is_superuser: true,
        }
    }

    fn draft_by(author: i64) -> Article {
        Article::new(
            Snowflake::new(100),
            "Draft".to_string(),
            String::new(),
            String::new(),
            Snowflake::new(1),
            Snowflake::new(author),
            ArticleStatus::Draft,
            None,
        )
    }

    #[test]
    fn test_anonymous_scope_is_published_only() {
        assert_eq!(
            article_scope(&Requester::Anonymous),
            ArticleScope::PublishedOnly
        );
    }

    #[test]
    fn test_admin_scope_is_all() {
        assert_eq!(article_scope(&known(1, Role::Admin)), ArticleScope::All);
        assert_eq!(article_scope(&superuser(1)), ArticleScope::All);
    }

    #[test]
    fn test_author_scope_is_union() {
        assert_eq!(
            article_scope(&known(7, Role::Author)),
            ArticleScope::OwnOrPublished(Snowflake::new(7))
        );
    }

    #[test]
    fn test_category_writes_admin_only() {
        assert!(!can_modify_categories(&Requester::Anonymous));
        assert!(!can_modify_categories(&known(1, Role::Author)));
        assert!(can_modify_categories(&known(1, Role::Admin)));
        assert!(can_modify_categories(&superuser(1)));
    }

    #[test]
    fn test_article_writes_author_or_admin() {
        let article = draft_by(7);
        assert!(!can_modify_article(&Requester::Anonymous, &article));
        assert!(can_modify_article(&known(7, Role::Author), &article));
        assert!(!can_modify_article(&known(8, Role::Author), &article));
        assert!(can_modify_article(&known(9, Role::Admin), &article));
        assert!(can_modify_article(&superuser(9), &article));
    }

    #[test]
    fn test_scrape_trigger_admin_only() {
        assert!(!can_trigger_scrape(&Requester::Anonymous));
        assert!(!can_trigger_scrape(&known(1, Role::Author)));
        assert!(can_trigger_scrape(&known(1, Role::Admin)));
    }
}
