//! Author-side derived queries.
//!
//! All views are computed from the article registry on demand. The author's
//! own `added_articles` list is never consulted, so reassigning an article
//! moves it between authors in every view at once.

use crate::model::article::{Article, ArticleId};
use crate::model::author::AuthorId;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};
use crate::service::catalog_service::CatalogService;
use log::info;
use std::collections::HashSet;

impl<R: CatalogRepository> CatalogService<R> {
    /// Articles written by `author_id`, in registry order.
    pub fn author_articles(&self, author_id: AuthorId) -> RepoResult<Vec<Article>> {
        self.require_author(author_id)?;
        Ok(self
            .repo
            .list_articles()
            .iter()
            .filter(|article| article.author() == author_id)
            .cloned()
            .collect())
    }

    /// Unique magazines the author has written for, in order of first article.
    pub fn author_magazines(&self, author_id: AuthorId) -> RepoResult<Vec<Magazine>> {
        self.require_author(author_id)?;
        let mut seen = HashSet::<MagazineId>::new();
        let mut magazines = Vec::new();
        for article in self.repo.list_articles() {
            if article.author() != author_id || !seen.insert(article.magazine()) {
                continue;
            }
            magazines.push(self.require_magazine(article.magazine())?.clone());
        }
        Ok(magazines)
    }

    /// Creates an article by this author and records it on the author.
    ///
    /// Errors from article creation propagate unchanged and leave the
    /// author's `added_articles` untouched.
    pub fn add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<ArticleId> {
        let article_id = self.create_article(author_id, magazine_id, title)?;
        self.repo
            .get_author_mut(author_id)
            .ok_or(RepoError::AuthorNotFound(author_id))?
            .record_added_article(article_id);
        info!(
            "event=author_add_article module=catalog status=ok author_id={author_id} \
             article_id={article_id}"
        );
        Ok(article_id)
    }

    /// Unique categories across the author's magazines.
    ///
    /// Returns `None` when the author has no articles at all.
    pub fn topic_areas(&self, author_id: AuthorId) -> RepoResult<Option<Vec<String>>> {
        let magazines = self.author_magazines(author_id)?;
        if magazines.is_empty() {
            return Ok(None);
        }

        let mut seen = HashSet::<&str>::new();
        let categories = magazines
            .iter()
            .filter(|magazine| seen.insert(magazine.category()))
            .map(|magazine| magazine.category().to_string())
            .collect();
        Ok(Some(categories))
    }
}
