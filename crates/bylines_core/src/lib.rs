//! Core domain logic for Bylines.
//! This crate is the single source of truth for the author/magazine/article
//! invariants and the queries derived from them.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{
    ErrorKind, ValidationError, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS,
    TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
pub use repo::catalog_repo::{CatalogRepository, MemoryCatalogRepository, RepoError, RepoResult};
pub use service::catalog_service::CatalogService;
pub use service::CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE;

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
