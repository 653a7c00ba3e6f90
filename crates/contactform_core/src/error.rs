//! Request-level error taxonomy.
//!
//! # Responsibility
//! - Tag every failure a contact operation can end in, so callers branch on
//!   kind instead of parsing text.
//!
//! # Invariants
//! - `Validation` means no store interaction happened.
//! - `Connection` means no statement ran.
//! - `NotFound` is an expected outcome, never a store failure.

use crate::db::DbError;
use crate::model::contact::{ContactId, ValidationError};
use crate::repo::contact_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug)]
pub enum ContactError {
    /// Input failed a business rule before any store access.
    Validation(ValidationError),
    /// The store could not be reached or bootstrapped.
    Connection(DbError),
    /// A statement failed after a connection was obtained.
    Store(RepoError),
    /// Target id does not exist.
    NotFound(ContactId),
}

impl ContactError {
    /// Stable kind label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Connection(_) => "connection",
            Self::Store(_) => "store",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl Display for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Connection(err) => write!(f, "store connection failed: {err}"),
            Self::Store(err) => write!(f, "store operation failed: {err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
        }
    }
}

impl Error for ContactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Connection(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for ContactError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Failures raised while acquiring a connection.
impl From<DbError> for ContactError {
    fn from(value: DbError) -> Self {
        Self::Connection(value)
    }
}

impl From<RepoError> for ContactError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}
