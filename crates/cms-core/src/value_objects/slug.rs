//! URL slug derivation
//!
//! Slugs are derived deterministically from names/titles: lowercase ASCII
//! alphanumerics with runs of other characters collapsed to single hyphens.

/// Derive a URL-safe slug from free-form text.
///
/// Deterministic: the same input always yields the same slug, so re-saving an
/// entity without changing its name leaves the slug untouched.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
