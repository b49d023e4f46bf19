//! Catalog repository contract and in-memory registry.
//!
//! # Responsibility
//! - Provide insert/lookup APIs over authors, magazines and the article
//!   registry.
//! - Reject dangling author/magazine references at the write boundary.
//!
//! # Invariants
//! - `list_articles` returns registry insertion order.
//! - Entity ids are unique per kind; re-inserting an id is rejected.
//! - A repository instance is an explicit owned value. No global state.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{ErrorKind, ValidationError};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for registry writes and catalog queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    /// An entity with this id is already registered.
    DuplicateId(Uuid),
    /// An article was pointed at an author that is not registered.
    UnknownAuthor(AuthorId),
    /// An article was pointed at a magazine that is not registered.
    UnknownMagazine(MagazineId),
    AuthorNotFound(AuthorId),
    MagazineNotFound(MagazineId),
    ArticleNotFound(ArticleId),
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(err) => err.kind(),
            Self::DuplicateId(_) => ErrorKind::Value,
            Self::UnknownAuthor(_) | Self::UnknownMagazine(_) => ErrorKind::Type,
            Self::AuthorNotFound(_) | Self::MagazineNotFound(_) | Self::ArticleNotFound(_) => {
                ErrorKind::NotFound
            }
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "entity id already registered: {id}"),
            Self::UnknownAuthor(id) => {
                write!(f, "author must be a registered Author, got unknown id {id}")
            }
            Self::UnknownMagazine(id) => {
                write!(
                    f,
                    "magazine must be a registered Magazine, got unknown id {id}"
                )
            }
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract for the catalog graph.
pub trait CatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId>;
    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId>;
    /// Appends one article to the registry after checking its references.
    fn append_article(&mut self, article: Article) -> RepoResult<ArticleId>;

    fn get_author(&self, id: AuthorId) -> Option<&Author>;
    fn get_author_mut(&mut self, id: AuthorId) -> Option<&mut Author>;
    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine>;
    fn get_magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;
    fn get_article(&self, id: ArticleId) -> Option<&Article>;
    fn get_article_mut(&mut self, id: ArticleId) -> Option<&mut Article>;

    /// Returns every registered article in insertion order.
    fn list_articles(&self) -> &[Article];
}

/// In-memory catalog registry.
#[derive(Debug, Default)]
pub struct MemoryCatalogRepository {
    authors: HashMap<AuthorId, Author>,
    magazines: HashMap<MagazineId, Magazine>,
    articles: Vec<Article>,
    article_index: HashMap<ArticleId, usize>,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }
}

impl CatalogRepository for MemoryCatalogRepository {
    fn insert_author(&mut self, author: Author) -> RepoResult<AuthorId> {
        let id = author.id();
        if self.authors.contains_key(&id) {
            return Err(RepoError::DuplicateId(id));
        }
        self.authors.insert(id, author);
        Ok(id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> RepoResult<MagazineId> {
        let id = magazine.id();
        if self.magazines.contains_key(&id) {
            return Err(RepoError::DuplicateId(id));
        }
        self.magazines.insert(id, magazine);
        Ok(id)
    }

    fn append_article(&mut self, article: Article) -> RepoResult<ArticleId> {
        if !self.authors.contains_key(&article.author()) {
            return Err(RepoError::UnknownAuthor(article.author()));
        }
        if !self.magazines.contains_key(&article.magazine()) {
            return Err(RepoError::UnknownMagazine(article.magazine()));
        }
        let id = article.id();
        if self.article_index.contains_key(&id) {
            return Err(RepoError::DuplicateId(id));
        }

        self.article_index.insert(id, self.articles.len());
        self.articles.push(article);
        Ok(id)
    }

    fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    fn get_author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.get_mut(&id)
    }

    fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(&id)
    }

    fn get_magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.get_mut(&id)
    }

    fn get_article(&self, id: ArticleId) -> Option<&Article> {
        let index = *self.article_index.get(&id)?;
        self.articles.get(index)
    }

    fn get_article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        let index = *self.article_index.get(&id)?;
        self.articles.get_mut(index)
    }

    fn list_articles(&self) -> &[Article] {
        &self.articles
    }
}
