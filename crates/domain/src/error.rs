//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]`, so callers only ever match on three categories.

use crate::id::Identifier;

/// Top-level error returned by domain and application code.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// A request carried incomplete data.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An identifier did not resolve.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected while building an entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("Missing {0}")]
    MissingField(&'static str),
}

/// Lookup of an entity by identifier failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of the missing entity (`"State"`, `"City"`, …).
    pub entity: &'static str,
    /// The identifier as supplied by the caller.
    pub id: String,
}

impl NotFoundError {
    /// Build a not-found error for any displayable identifier.
    pub fn new(entity: &'static str, id: impl ToString) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }

    /// Build a not-found error for a typed id, naming its kind.
    pub fn of<I: Identifier>(id: I) -> Self {
        Self::new(I::KIND, id)
    }
}
