//! Shared data types for the application.

use std::fmt;

/// A group (folder) in the database, as shown in the group menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub uuid: String,
    pub name: String,
    /// Names from the root down to this group, joined with `/`.
    pub path: String,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// A password entry as listed in a group.
///
/// Carries no secret values; see [`EntryFields`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub uuid: String,
    pub title: String,
    pub username: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// The readable fields of an entry, loaded on demand for the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    pub title: String,
    pub url: String,
    pub password: String,
}

/// Join a parent path and a group name.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
