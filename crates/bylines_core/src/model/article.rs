//! Article edge record.
//!
//! # Responsibility
//! - Bind one author and one magazine under a title.
//!
//! # Invariants
//! - `title` is 5..=50 characters and never changes after construction.
//! - `author`/`magazine` are plain ids. Whether they point at registered
//!   entities is checked by the catalog service, not here.

use crate::model::author::AuthorId;
use crate::model::char_len;
use crate::model::magazine::MagazineId;
use crate::model::validation::{ValidationError, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Creates an article with a generated stable ID.
    pub fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author, magazine, title)
    }

    /// Creates an article with a caller-provided stable ID.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil uuid.
    /// - `InvalidTitle` when `title` is outside 5..=50 characters.
    pub fn with_id(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if id.is_nil() {
            return Err(ValidationError::NilId);
        }
        let title = title.into();
        let chars = char_len(&title);
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&chars) {
            return Err(ValidationError::InvalidTitle { chars });
        }

        Ok(Self {
            id,
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
