//! Writes a small sample database for trying out kpnav by hand.
//!
//! Usage: `create_test_db [PATH] [PASSWORD]`

use keepass::{config::DatabaseConfig, db::Node, db::Value, Database, DatabaseKey};
use std::fs::File;

fn entry(title: &str, username: &str, password: &str, url: &str) -> keepass::db::Entry {
    let mut entry = keepass::db::Entry::new();
    entry.fields.insert("Title".to_string(), Value::Unprotected(title.to_string()));
    entry.fields.insert("UserName".to_string(), Value::Unprotected(username.to_string()));
    entry.fields.insert("Password".to_string(), Value::Protected(password.as_bytes().into()));
    entry.fields.insert("URL".to_string(), Value::Unprotected(url.to_string()));
    entry
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "test_db.kdbx".to_string());
    let password = args.next().unwrap_or_else(|| "password".to_string());

    let mut db = Database::new(DatabaseConfig::default());
    db.meta.database_name = Some("Test DB".to_string());

    let mut personal = keepass::db::Group::new("Personal");
    personal.children.push(Node::Entry(entry(
        "Email",
        "me@example.com",
        "hunter2",
        "https://mail.example.com",
    )));
    personal.children.push(Node::Entry(entry(
        "Bank",
        "me",
        "correct horse",
        "https://bank.example.com",
    )));

    let mut work = keepass::db::Group::new("Work");
    work.children.push(Node::Entry(entry(
        "VPN",
        "jdoe",
        "s3cr3t",
        "https://vpn.example.com",
    )));

    db.root.children.push(Node::Group(personal));
    db.root.children.push(Node::Group(work));

    let key = DatabaseKey::new().with_password(&password);
    let mut file = File::create(&path)?;
    db.save(&mut file, key)?;

    println!("Created {path} with password '{password}'");
    Ok(())
}
