//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ContactBookError`] via `From`.

use crate::id::ContactId;

/// Top-level error returned by domain, application and port operations.
#[derive(Debug, thiserror::Error)]
pub enum ContactBookError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Opaque failure from a storage adapter (I/O, decoding, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid status {0:?}, expected \"active\" or \"inactive\"")]
    InvalidStatus(String),

    #[error("a contact with id {0} already exists")]
    DuplicateId(ContactId),

    #[error("no contact id left after {0}")]
    IdSpaceExhausted(ContactId),

    #[error("invalid contact id {0:?}")]
    InvalidId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
