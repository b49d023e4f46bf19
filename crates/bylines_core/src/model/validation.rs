//! Field validation errors shared by all entities.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum magazine name length, inclusive.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length, inclusive.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum article title length, inclusive.
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length, inclusive.
pub const TITLE_MAX_CHARS: usize = 50;

/// Coarse classification of every error raised by core.
///
/// Callers branch on the kind; the concrete variant carries the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A reference does not point at a registered entity of the expected kind.
    Type,
    /// A value has the right shape but violates a length or emptiness rule.
    Value,
    /// A lookup by id found nothing.
    NotFound,
}

/// Validation failure raised while constructing or mutating an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Caller supplied the nil uuid as an entity id.
    NilId,
    /// Author name has zero characters.
    EmptyAuthorName,
    /// Magazine name is outside `2..=16` characters.
    InvalidMagazineName { chars: usize },
    /// Magazine category has zero characters.
    EmptyCategory,
    /// Article title is outside `5..=50` characters.
    InvalidTitle { chars: usize },
}

impl ValidationError {
    /// Every validation failure is a value-level violation.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "entity id must not be nil"),
            Self::EmptyAuthorName => write!(f, "author name cannot be empty"),
            Self::InvalidMagazineName { chars } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and \
                 {MAGAZINE_NAME_MAX_CHARS} characters, got {chars}"
            ),
            Self::EmptyCategory => write!(f, "magazine category cannot be empty"),
            Self::InvalidTitle { chars } => write!(
                f,
                "article title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} \
                 characters, inclusive, got {chars}"
            ),
        }
    }
}

impl Error for ValidationError {}
