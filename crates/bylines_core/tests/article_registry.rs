use bylines_core::{
    CatalogRepository, CatalogService, ErrorKind, MemoryCatalogRepository, RepoError,
    ValidationError,
};
use uuid::Uuid;

#[test]
fn create_article_registers_in_insertion_order() {
    let mut service = CatalogService::in_memory();
    let ann = service.create_author("Ann").unwrap();
    let vogue = service.create_magazine("Vogue", "Fashion").unwrap();
    let wired = service.create_magazine("Wired", "Technology").unwrap();

    let first = service.create_article(ann, vogue, "First Piece").unwrap();
    let second = service.create_article(ann, wired, "Second Piece").unwrap();

    let ids: Vec<_> = service.articles().iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(service.repository().article_count(), 2);
}

#[test]
fn identical_articles_are_both_kept() {
    let mut service = CatalogService::in_memory();
    let ann = service.create_author("Ann").unwrap();
    let vogue = service.create_magazine("Vogue", "Fashion").unwrap();

    let a = service.create_article(ann, vogue, "Same Title").unwrap();
    let b = service.create_article(ann, vogue, "Same Title").unwrap();

    assert_ne!(a, b);
    assert_eq!(
        service.article_titles(vogue).unwrap(),
        vec!["Same Title", "Same Title"]
    );
}

#[test]
fn create_article_rejects_unknown_references_and_bad_titles() {
    let mut service = CatalogService::in_memory();
    let ann = service.create_author("Ann").unwrap();
    let vogue = service.create_magazine("Vogue", "Fashion").unwrap();
    let ghost = Uuid::new_v4();

    let err = service.create_article(ann, ghost, "Valid Title").unwrap_err();
    assert_eq!(err, RepoError::UnknownMagazine(ghost));
    assert_eq!(err.kind(), ErrorKind::Type);

    let err = service.create_article(ann, vogue, "Tiny").unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::InvalidTitle { chars: 4 })
    );
    assert_eq!(err.kind(), ErrorKind::Value);

    let long = "x".repeat(51);
    assert!(service.create_article(ann, vogue, long).is_err());
    assert!(service.articles().is_empty());
}

#[test]
fn reassigning_magazine_moves_article_between_views() {
    let mut service = CatalogService::in_memory();
    let ann = service.create_author("Ann").unwrap();
    let vogue = service.create_magazine("Vogue", "Fashion").unwrap();
    let wired = service.create_magazine("Wired", "Technology").unwrap();
    let article = service.create_article(ann, vogue, "Moving Piece").unwrap();

    service.reassign_article_magazine(article, wired).unwrap();

    assert!(service.magazine_articles(vogue).unwrap().is_empty());
    assert_eq!(service.article_titles(wired).unwrap(), vec!["Moving Piece"]);
    assert_eq!(service.article(article).unwrap().title(), "Moving Piece");

    let ghost = Uuid::new_v4();
    assert_eq!(
        service.reassign_article_magazine(article, ghost).unwrap_err(),
        RepoError::UnknownMagazine(ghost)
    );
    assert_eq!(
        service.reassign_article_author(ghost, ann).unwrap_err(),
        RepoError::ArticleNotFound(ghost)
    );
}

#[test]
fn separate_registries_do_not_share_state() {
    let mut left = CatalogService::in_memory();
    let right = CatalogService::new(MemoryCatalogRepository::new());

    let ann = left.create_author("Ann").unwrap();
    let vogue = left.create_magazine("Vogue", "Fashion").unwrap();
    left.create_article(ann, vogue, "Only On Left").unwrap();

    assert_eq!(left.repository().list_articles().len(), 1);
    assert!(right.articles().is_empty());
    assert_eq!(
        right.author(ann).unwrap_err(),
        RepoError::AuthorNotFound(ann)
    );
}
