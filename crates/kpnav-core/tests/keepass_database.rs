//! Integration tests against real KDBX files.

use keepass::{config::DatabaseConfig, db::Node, db::Value, Database, DatabaseKey};
use kpnav_core::{KeepassStore, OpenError, Vault, VaultStore};
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PASSWORD: &str = "correct horse";

fn entry(title: &str, username: &str, password: &str, url: &str) -> keepass::db::Entry {
    let mut entry = keepass::db::Entry::new();
    entry.fields.insert("Title".to_string(), Value::Unprotected(title.to_string()));
    entry.fields.insert("UserName".to_string(), Value::Unprotected(username.to_string()));
    entry.fields.insert("Password".to_string(), Value::Protected(password.as_bytes().into()));
    entry.fields.insert("URL".to_string(), Value::Unprotected(url.to_string()));
    entry
}

/// Root
/// ├── Personal (Email)
/// │   └── Shopping (Store)
/// └── Work (VPN, Wiki)
fn write_sample(dir: &Path) -> PathBuf {
    let mut db = Database::new(DatabaseConfig::default());
    db.root.name = "Root".to_string();

    let mut shopping = keepass::db::Group::new("Shopping");
    shopping.children.push(Node::Entry(entry("Store", "buyer", "cart", "https://store.example")));

    let mut personal = keepass::db::Group::new("Personal");
    personal.children.push(Node::Entry(entry("Email", "me", "hunter2", "https://mail.example")));
    personal.children.push(Node::Group(shopping));

    let mut work = keepass::db::Group::new("Work");
    work.children.push(Node::Entry(entry("VPN", "jdoe", "s3cr3t", "https://vpn.example")));
    work.children.push(Node::Entry(entry("Wiki", "", "wikipass", "https://wiki.example")));

    db.root.children.push(Node::Group(personal));
    db.root.children.push(Node::Group(work));

    let path = dir.join("sample.kdbx");
    let mut file = File::create(&path).expect("Failed to create sample file");
    db.save(&mut file, DatabaseKey::new().with_password(PASSWORD))
        .expect("Failed to save sample database");
    path
}

#[test]
fn lists_groups_depth_first_with_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_sample(temp_dir.path());

    let db = KeepassStore.open(&path, PASSWORD).expect("Open failed");
    let paths: Vec<String> = db.groups().into_iter().map(|g| g.path).collect();

    assert_eq!(
        paths,
        vec!["Root", "Root/Personal", "Root/Personal/Shopping", "Root/Work"]
    );
}

#[test]
fn entries_are_direct_children_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_sample(temp_dir.path());
    let db = KeepassStore.open(&path, PASSWORD).expect("Open failed");

    let groups = db.groups();
    let personal = groups.iter().find(|g| g.name == "Personal").expect("no Personal");
    let titles: Vec<String> = db.entries(personal).into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Email"]);

    let work = groups.iter().find(|g| g.name == "Work").expect("no Work");
    let entries = db.entries(work);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].username, "jdoe");
    assert_eq!(entries[1].username, "");
}

#[test]
fn entry_fields_expose_url_and_password() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_sample(temp_dir.path());
    let db = KeepassStore.open(&path, PASSWORD).expect("Open failed");

    let groups = db.groups();
    let work = groups.iter().find(|g| g.name == "Work").expect("no Work");
    let vpn = db.entries(work).into_iter().next().expect("no entries");

    let fields = db.entry_fields(&vpn).expect("entry should exist");
    assert_eq!(fields.title, "VPN");
    assert_eq!(fields.url, "https://vpn.example");
    assert_eq!(fields.password, "s3cr3t");
}

#[test]
fn wrong_password_is_invalid_credentials() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_sample(temp_dir.path());

    let err = KeepassStore.open(&path, "wrong").err().expect("open should fail");
    assert!(err.is_credentials(), "unexpected error: {err}");
}

#[test]
fn garbage_file_is_not_a_credentials_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("garbage.kdbx");
    std::fs::write(&path, b"this is plain text and certainly not a kdbx file").expect("write");

    let err = KeepassStore.open(&path, PASSWORD).err().expect("open should fail");
    assert!(!err.is_credentials());
}

#[test]
fn missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = KeepassStore
        .open(&temp_dir.path().join("missing.kdbx"), PASSWORD)
        .err()
        .expect("open should fail");
    assert!(matches!(err, OpenError::Io(_)));
}

#[test]
fn created_database_can_be_reopened() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("new.kdbx");

    let created = KeepassStore.create(&path, "secret123").expect("Create failed");
    assert_eq!(created.groups().len(), 1);
    assert!(path.is_file());

    let reopened = KeepassStore.open(&path, "secret123").expect("Reopen failed");
    let groups = reopened.groups();
    assert_eq!(groups.len(), 1);
    assert!(reopened.entries(&groups[0]).is_empty());

    let err = KeepassStore.open(&path, "secret1234").err().expect("open should fail");
    assert!(err.is_credentials());
}
