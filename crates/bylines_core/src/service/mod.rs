//! Core use-case services.
//!
//! # Responsibility
//! - Expose construction, mutation and derived-query entry points.
//! - Keep callers decoupled from registry layout.

mod author_queries;
pub mod catalog_service;
mod magazine_queries;

/// Strict lower bound on per-magazine article count for a contributing author.
pub const CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE: usize = 2;
