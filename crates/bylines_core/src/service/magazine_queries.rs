//! Magazine-side derived queries.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::MagazineId;
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use crate::service::catalog_service::CatalogService;
use crate::service::CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE;
use std::collections::HashMap;

impl<R: CatalogRepository> CatalogService<R> {
    /// Articles published in `magazine_id`, in registry order.
    pub fn magazine_articles(&self, magazine_id: MagazineId) -> RepoResult<Vec<Article>> {
        Ok(self
            .published_in(magazine_id)?
            .into_iter()
            .cloned()
            .collect())
    }

    /// Unique authors of this magazine's articles, in order of first article.
    pub fn contributors(&self, magazine_id: MagazineId) -> RepoResult<Vec<Author>> {
        let counts = self.articles_per_author(magazine_id)?;
        counts
            .into_iter()
            .map(|(author_id, _)| self.require_author(author_id).cloned())
            .collect()
    }

    /// Titles of this magazine's articles; empty when nothing is published.
    pub fn article_titles(&self, magazine_id: MagazineId) -> RepoResult<Vec<String>> {
        Ok(self
            .published_in(magazine_id)?
            .into_iter()
            .map(|article| article.title().to_string())
            .collect())
    }

    /// Contributors with more than two articles in this magazine.
    pub fn contributing_authors(&self, magazine_id: MagazineId) -> RepoResult<Vec<Author>> {
        let counts = self.articles_per_author(magazine_id)?;
        counts
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE)
            .map(|(author_id, _)| self.require_author(author_id).cloned())
            .collect()
    }

    fn published_in(&self, magazine_id: MagazineId) -> RepoResult<Vec<&Article>> {
        self.require_magazine(magazine_id)?;
        Ok(self
            .repo
            .list_articles()
            .iter()
            .filter(|article| article.magazine() == magazine_id)
            .collect())
    }

    /// Per-author article counts, ordered by each author's first article.
    fn articles_per_author(&self, magazine_id: MagazineId) -> RepoResult<Vec<(AuthorId, usize)>> {
        let mut order = Vec::<(AuthorId, usize)>::new();
        let mut slots = HashMap::<AuthorId, usize>::new();
        for article in self.published_in(magazine_id)? {
            let slot = *slots.entry(article.author()).or_insert_with(|| {
                order.push((article.author(), 0));
                order.len() - 1
            });
            order[slot].1 += 1;
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use crate::service::catalog_service::CatalogService;

    #[test]
    fn per_author_counts_follow_first_appearance() {
        let mut service = CatalogService::in_memory();
        let ann = service.create_author("Ann").unwrap();
        let bob = service.create_author("Bob").unwrap();
        let vogue = service.create_magazine("Vogue", "Fashion").unwrap();

        service.add_article(bob, vogue, "Bob Writes One").unwrap();
        service.add_article(ann, vogue, "Ann Writes One").unwrap();
        service.add_article(bob, vogue, "Bob Writes Two").unwrap();

        let counts = service.articles_per_author(vogue).unwrap();
        assert_eq!(counts, vec![(bob, 2), (ann, 1)]);
    }
}
