//! KeePass database operations wrapper.

use crate::error::OpenError;
use crate::models::{join_path, Entry, EntryFields, Group};
use crate::vault::{Vault, VaultStore};
use keepass::config::DatabaseConfig;
use keepass::db::Node;
use keepass::{Database, DatabaseKey};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Wrapper around an unlocked KeePass database.
pub struct KeepassDatabase {
    db: Database,
    path: PathBuf,
}

impl KeepassDatabase {
    /// Open and unlock a KeePass database.
    pub fn unlock(path: impl AsRef<Path>, password: &str) -> Result<Self, OpenError> {
        let path = path.as_ref();
        let key = DatabaseKey::new().with_password(password);

        let db = Database::open(&mut File::open(path)?, key)?;
        tracing::debug!("Unlocked database {}", path.display());

        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }

    /// Create an empty database and write it to `path`.
    pub fn create(path: impl AsRef<Path>, password: &str) -> Result<Self, OpenError> {
        let path = path.as_ref();
        let key = DatabaseKey::new().with_password(password);

        let db = Database::new(DatabaseConfig::default());
        let mut file = File::create(path)?;
        db.save(&mut file, key)?;
        tracing::info!("Created database {}", path.display());

        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }

    fn collect_groups(kg: &keepass::db::Group, parent: &str, out: &mut Vec<Group>) {
        let path = join_path(parent, &kg.name);
        out.push(Group {
            uuid: kg.uuid.to_string(),
            name: kg.name.clone(),
            path: path.clone(),
        });

        for node in &kg.children {
            if let Node::Group(g) = node {
                Self::collect_groups(g, &path, out);
            }
        }
    }

    fn find_group<'a>(kg: &'a keepass::db::Group, uuid: &str) -> Option<&'a keepass::db::Group> {
        if kg.uuid.to_string() == uuid {
            return Some(kg);
        }
        kg.children.iter().find_map(|node| match node {
            Node::Group(g) => Self::find_group(g, uuid),
            Node::Entry(_) => None,
        })
    }

    fn find_entry<'a>(kg: &'a keepass::db::Group, uuid: &str) -> Option<&'a keepass::db::Entry> {
        kg.children.iter().find_map(|node| match node {
            Node::Entry(e) if e.uuid.to_string() == uuid => Some(e),
            Node::Entry(_) => None,
            Node::Group(g) => Self::find_entry(g, uuid),
        })
    }

    /// Convert a keepass::Entry to the menu summary.
    fn convert_entry(ke: &keepass::db::Entry) -> Entry {
        Entry {
            uuid: ke.uuid.to_string(),
            title: ke.get_title().unwrap_or_default().to_string(),
            username: ke.get_username().unwrap_or_default().to_string(),
        }
    }
}

impl Vault for KeepassDatabase {
    fn groups(&self) -> Vec<Group> {
        let mut groups = Vec::new();
        Self::collect_groups(&self.db.root, "", &mut groups);
        groups
    }

    fn entries(&self, group: &Group) -> Vec<Entry> {
        let Some(kg) = Self::find_group(&self.db.root, &group.uuid) else {
            tracing::warn!("Group {} not found in {}", group.uuid, self.path.display());
            return Vec::new();
        };

        kg.children
            .iter()
            .filter_map(|node| match node {
                Node::Entry(e) => Some(Self::convert_entry(e)),
                Node::Group(_) => None,
            })
            .collect()
    }

    fn entry_fields(&self, entry: &Entry) -> Option<EntryFields> {
        let ke = Self::find_entry(&self.db.root, &entry.uuid)?;

        Some(EntryFields {
            title: ke.get_title().unwrap_or_default().to_string(),
            url: ke.get_url().unwrap_or_default().to_string(),
            password: ke.get_password().unwrap_or_default().to_string(),
        })
    }
}

/// [`VaultStore`] backed by KDBX files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepassStore;

impl VaultStore for KeepassStore {
    type Vault = KeepassDatabase;

    fn open(&self, path: &Path, password: &str) -> Result<KeepassDatabase, OpenError> {
        KeepassDatabase::unlock(path, password)
    }

    fn create(&self, path: &Path, password: &str) -> Result<KeepassDatabase, OpenError> {
        KeepassDatabase::create(path, password)
    }
}
