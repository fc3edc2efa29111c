//! Item identifiers.
//!
//! Cart items are keyed by a stable string id: either the product's
//! explicit id, or a slug derived from its title.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique cart item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from an explicit string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an id from a product title.
    pub fn from_title(title: &str) -> Self {
        Self(slugify(title))
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive a key-safe slug from a title.
///
/// Lowercases the input, collapses each whitespace run to a single hyphen,
/// and strips every character outside `[a-z0-9-]`.
///
/// ```
/// use nexus_commerce::slugify;
/// assert_eq!(slugify("Book A"), "book-a");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut last_was_space = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                slug.push('-');
            }
            last_was_space = true;
        } else {
            last_was_space = false;
            if ch.is_ascii_alphanumeric() || ch == '-' {
                slug.push(ch);
            }
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Slug Tests ===

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Book A"), "book-a");
        assert_eq!(slugify("The Rust Programming Language"), "the-rust-programming-language");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Book   A"), "book-a");
        assert_eq!(slugify("Book \t\n A"), "book-a");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Caf\u{e9} #1"), "caf-1");
        assert_eq!(slugify("C++ in Depth!"), "c-in-depth");
    }

    #[test]
    fn test_slugify_keeps_hyphens() {
        assert_eq!(slugify("Pre-Order Edition"), "pre-order-edition");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    // === ItemId Tests ===

    #[test]
    fn test_id_creation() {
        let id = ItemId::new("book-123");
        assert_eq!(id.as_str(), "book-123");
    }

    #[test]
    fn test_id_from_title() {
        let id = ItemId::from_title("Book A");
        assert_eq!(id.as_str(), "book-a");
    }

    #[test]
    fn test_id_display() {
        let id = ItemId::new("book-789");
        assert_eq!(format!("{}", id), "book-789");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ItemId::new("same"), ItemId::from_title("Same"));
        assert_ne!(ItemId::new("a"), ItemId::new("b"));
    }
}
