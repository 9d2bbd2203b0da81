//! Capability traits between the navigator and a database backend.

use crate::error::OpenError;
use crate::models::{Entry, EntryFields, Group};
use std::path::Path;

/// Read-only view of an unlocked database.
pub trait Vault {
    /// All groups in depth-first order, root first.
    fn groups(&self) -> Vec<Group>;

    /// Entries directly inside `group`, in database order.
    ///
    /// Unknown groups yield an empty list.
    fn entries(&self, group: &Group) -> Vec<Entry>;

    /// Fields of `entry`, or `None` if it is no longer in the database.
    fn entry_fields(&self, entry: &Entry) -> Option<EntryFields>;
}

/// Opens and creates databases of one backend.
pub trait VaultStore {
    type Vault: Vault;

    /// Unlock an existing database with `password`.
    fn open(&self, path: &Path, password: &str) -> Result<Self::Vault, OpenError>;

    /// Create an empty database at `path`, protected by `password`.
    fn create(&self, path: &Path, password: &str) -> Result<Self::Vault, OpenError>;
}
