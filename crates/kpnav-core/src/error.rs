//! Errors raised while opening or creating a database.

use keepass::error::{DatabaseKeyError, DatabaseOpenError, DatabaseSaveError};
use thiserror::Error;

/// Failure of [`VaultStore::open`](crate::VaultStore::open) or
/// [`VaultStore::create`](crate::VaultStore::create).
///
/// Only [`OpenError::InvalidCredentials`] is worth retrying; everything
/// else means the file itself cannot be used.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The password did not unlock the database.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The file is corrupt, truncated or in an unsupported format.
    #[error("unreadable database: {0}")]
    Format(String),

    #[error("failed to write database: {0}")]
    Save(String),
}

impl OpenError {
    /// Whether prompting for another password could help.
    pub fn is_credentials(&self) -> bool {
        matches!(self, OpenError::InvalidCredentials)
    }
}

impl From<DatabaseOpenError> for OpenError {
    fn from(err: DatabaseOpenError) -> Self {
        match err {
            DatabaseOpenError::Key(DatabaseKeyError::IncorrectKey) => OpenError::InvalidCredentials,
            DatabaseOpenError::Io(e) => OpenError::Io(e),
            other => OpenError::Format(other.to_string()),
        }
    }
}

impl From<DatabaseSaveError> for OpenError {
    fn from(err: DatabaseSaveError) -> Self {
        match err {
            DatabaseSaveError::Io(e) => OpenError::Io(e),
            other => OpenError::Save(other.to_string()),
        }
    }
}
