//! Domain model for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three entity records and their field validation rules.
//! - Keep every entity fully valid from construction onwards.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil uuid.
//! - Articles are the only carriers of the author-magazine edge.
//! - Lengths are counted in Unicode scalar values, not bytes.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;

pub use validation::{ErrorKind, ValidationError};

/// Counts characters the way length bounds are specified.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
