//! Author domain model.
//!
//! # Responsibility
//! - Hold author identity and its immutable display name.
//! - Remember which articles were created through this author.
//!
//! # Invariants
//! - `name` is non-empty and never reassigned after construction.
//! - `added_articles` is provenance only. Relationship queries read the
//!   registry, not this list.

use crate::model::article::ArticleId;
use crate::model::char_len;
use crate::model::validation::ValidationError;
use uuid::Uuid;

/// Stable identifier for an author.
pub type AuthorId = Uuid;

/// A person who writes articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: String,
    added_articles: Vec<ArticleId>,
}

impl Author {
    /// Creates an author with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an author with a caller-provided stable ID.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil uuid.
    /// - `EmptyAuthorName` when `name` has no characters.
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilId);
        }
        let name = name.into();
        if char_len(&name) == 0 {
            return Err(ValidationError::EmptyAuthorName);
        }

        Ok(Self {
            id,
            name,
            added_articles: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Returns the name given at construction. There is no setter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Articles created via `add_article` on this author, oldest first.
    pub fn added_articles(&self) -> &[ArticleId] {
        &self.added_articles
    }

    pub(crate) fn record_added_article(&mut self, article_id: ArticleId) {
        self.added_articles.push(article_id);
    }
}

#[cfg(test)]
mod tests {
    use super::Author;
    use crate::model::validation::ValidationError;
    use uuid::Uuid;

    #[test]
    fn new_keeps_name_and_starts_without_articles() {
        let author = Author::new("Carry Bradshaw").unwrap();
        assert_eq!(author.name(), "Carry Bradshaw");
        assert!(!author.id().is_nil());
        assert!(author.added_articles().is_empty());
    }

    #[test]
    fn single_character_name_is_accepted() {
        assert!(Author::new("X").is_ok());
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = Author::with_id(Uuid::nil(), "Nathaniel").unwrap_err();
        assert_eq!(err, ValidationError::NilId);
    }

    #[test]
    fn record_added_article_appends_in_order() {
        let mut author = Author::new("Ann").unwrap();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        author.record_added_article(first);
        author.record_added_article(second);
        assert_eq!(author.added_articles(), &[first, second]);
    }
}
