//! Registry abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Own every registered author, magazine and article.
//! - Keep the article registry append-only and in insertion order.
//!
//! # Invariants
//! - Articles may only reference registered authors and magazines.
//! - Nothing is ever removed; there is no delete path.

pub mod catalog_repo;
