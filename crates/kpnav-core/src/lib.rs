//! Core models and database access for kpnav.
//!
//! The navigator only sees the [`Vault`] and [`VaultStore`] traits;
//! [`KeepassDatabase`] implements them on top of the `keepass` crate.

pub mod database;
pub mod error;
pub mod models;
pub mod vault;

pub use database::{KeepassDatabase, KeepassStore};
pub use error::OpenError;
pub use models::{Entry, EntryFields, Group};
pub use vault::{Vault, VaultStore};
