//! Catalog use-case service.
//!
//! # Responsibility
//! - Create and register authors, magazines and articles.
//! - Apply validated mutations to registered entities.
//!
//! # Invariants
//! - Article reference checks run before title validation.
//! - A rejected call leaves the registry unchanged.
//! - Log events carry ids and error kinds only, never names or titles.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::{
    CatalogRepository, MemoryCatalogRepository, RepoError, RepoResult,
};
use log::{debug, info};

/// Use-case facade over a catalog repository.
pub struct CatalogService<R: CatalogRepository> {
    pub(crate) repo: R,
}

impl CatalogService<MemoryCatalogRepository> {
    /// Creates a service over a fresh, empty in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(MemoryCatalogRepository::new())
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Registers a new author.
    pub fn create_author(&mut self, name: impl Into<String>) -> RepoResult<AuthorId> {
        let author = Author::new(name).inspect_err(|err| {
            debug!(
                "event=author_create module=catalog status=rejected kind={:?}",
                err.kind()
            );
        })?;
        let id = self.repo.insert_author(author)?;
        info!("event=author_create module=catalog status=ok author_id={id}");
        Ok(id)
    }

    /// Registers a new magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<MagazineId> {
        let magazine = Magazine::new(name, category).inspect_err(|err| {
            debug!(
                "event=magazine_create module=catalog status=rejected kind={:?}",
                err.kind()
            );
        })?;
        let id = self.repo.insert_magazine(magazine)?;
        info!("event=magazine_create module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    /// Creates an article and appends it to the registry.
    ///
    /// # Errors
    /// - `UnknownAuthor` / `UnknownMagazine` for unregistered references.
    /// - `Validation(InvalidTitle)` when the title is out of bounds.
    pub fn create_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<ArticleId> {
        let result = self.register_article(author_id, magazine_id, title);
        match &result {
            Ok(id) => info!(
                "event=article_create module=catalog status=ok article_id={id} \
                 author_id={author_id} magazine_id={magazine_id}"
            ),
            Err(err) => debug!(
                "event=article_create module=catalog status=rejected kind={:?}",
                err.kind()
            ),
        }
        result
    }

    pub fn author(&self, id: AuthorId) -> RepoResult<Author> {
        self.require_author(id).cloned()
    }

    pub fn magazine(&self, id: MagazineId) -> RepoResult<Magazine> {
        self.require_magazine(id).cloned()
    }

    pub fn article(&self, id: ArticleId) -> RepoResult<Article> {
        self.repo
            .get_article(id)
            .cloned()
            .ok_or(RepoError::ArticleNotFound(id))
    }

    /// Returns the whole registry in insertion order.
    pub fn articles(&self) -> Vec<Article> {
        self.repo.list_articles().to_vec()
    }

    /// Renames a magazine; the old name stays on rejection.
    pub fn rename_magazine(&mut self, id: MagazineId, name: impl Into<String>) -> RepoResult<()> {
        let magazine = self
            .repo
            .get_magazine_mut(id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        magazine.set_name(name)?;
        debug!("event=magazine_rename module=catalog status=ok magazine_id={id}");
        Ok(())
    }

    /// Replaces a magazine category; the old category stays on rejection.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<()> {
        let magazine = self
            .repo
            .get_magazine_mut(id)
            .ok_or(RepoError::MagazineNotFound(id))?;
        magazine.set_category(category)?;
        debug!("event=magazine_recategorize module=catalog status=ok magazine_id={id}");
        Ok(())
    }

    /// Points an article at another registered author. The title is not
    /// re-validated.
    pub fn reassign_article_author(
        &mut self,
        article_id: ArticleId,
        author_id: AuthorId,
    ) -> RepoResult<()> {
        if self.repo.get_author(author_id).is_none() {
            return Err(RepoError::UnknownAuthor(author_id));
        }
        let article = self
            .repo
            .get_article_mut(article_id)
            .ok_or(RepoError::ArticleNotFound(article_id))?;
        article.set_author(author_id);
        debug!(
            "event=article_reassign_author module=catalog status=ok article_id={article_id} \
             author_id={author_id}"
        );
        Ok(())
    }

    /// Points an article at another registered magazine.
    pub fn reassign_article_magazine(
        &mut self,
        article_id: ArticleId,
        magazine_id: MagazineId,
    ) -> RepoResult<()> {
        if self.repo.get_magazine(magazine_id).is_none() {
            return Err(RepoError::UnknownMagazine(magazine_id));
        }
        let article = self
            .repo
            .get_article_mut(article_id)
            .ok_or(RepoError::ArticleNotFound(article_id))?;
        article.set_magazine(magazine_id);
        debug!(
            "event=article_reassign_magazine module=catalog status=ok \
             article_id={article_id} magazine_id={magazine_id}"
        );
        Ok(())
    }

    pub(crate) fn register_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<ArticleId> {
        if self.repo.get_author(author_id).is_none() {
            return Err(RepoError::UnknownAuthor(author_id));
        }
        if self.repo.get_magazine(magazine_id).is_none() {
            return Err(RepoError::UnknownMagazine(magazine_id));
        }
        let article = Article::new(author_id, magazine_id, title)?;
        self.repo.append_article(article)
    }

    pub(crate) fn require_author(&self, id: AuthorId) -> RepoResult<&Author> {
        self.repo.get_author(id).ok_or(RepoError::AuthorNotFound(id))
    }

    pub(crate) fn require_magazine(&self, id: MagazineId) -> RepoResult<&Magazine> {
        self.repo
            .get_magazine(id)
            .ok_or(RepoError::MagazineNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogService;
    use crate::model::validation::{ErrorKind, ValidationError};
    use crate::repo::catalog_repo::RepoError;
    use uuid::Uuid;

    #[test]
    fn reference_errors_win_over_title_errors() {
        let mut service = CatalogService::in_memory();
        let magazine = service.create_magazine("Vogue", "Fashion").unwrap();
        let ghost = Uuid::new_v4();

        let err = service.create_article(ghost, magazine, "bad").unwrap_err();
        assert_eq!(err, RepoError::UnknownAuthor(ghost));
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(service.articles().is_empty());
    }

    #[test]
    fn rejected_rename_keeps_previous_name() {
        let mut service = CatalogService::in_memory();
        let magazine = service.create_magazine("Vogue", "Fashion").unwrap();

        let err = service.rename_magazine(magazine, "A").unwrap_err();
        assert_eq!(
            err,
            RepoError::Validation(ValidationError::InvalidMagazineName { chars: 1 })
        );
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(service.magazine(magazine).unwrap().name(), "Vogue");
    }

    #[test]
    fn reassignment_to_unknown_author_changes_nothing() {
        let mut service = CatalogService::in_memory();
        let author = service.create_author("Ann").unwrap();
        let magazine = service.create_magazine("Vogue", "Fashion").unwrap();
        let article = service
            .create_article(author, magazine, "Spring Looks")
            .unwrap();

        let ghost = Uuid::new_v4();
        assert_eq!(
            service.reassign_article_author(article, ghost).unwrap_err(),
            RepoError::UnknownAuthor(ghost)
        );
        assert_eq!(service.article(article).unwrap().author(), author);
    }

    #[test]
    fn lookups_of_unknown_ids_are_not_found() {
        let service = CatalogService::in_memory();
        let id = Uuid::new_v4();
        assert_eq!(
            service.author(id).unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            service.article(id).unwrap_err(),
            RepoError::ArticleNotFound(id)
        );
    }
}
