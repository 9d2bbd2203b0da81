//! Unlocking or creating the database.

use crate::prompt::PasswordSource;
use anyhow::{Context, Result};
use kpnav_core::VaultStore;
use std::path::Path;

pub const PASSWORD_PROMPT: &str = "Database password: ";

/// Password attempts allowed when opening an existing database.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Ask for the database password and open (or, with `is_new`, create) the
/// database at `path`.
///
/// Rejected passwords are retried up to `max_attempts` times, after which
/// `Ok(None)` is returned. Creation uses the first password given. Any
/// other failure is returned as an error.
pub fn open_or_create<S, P>(
    store: &S,
    path: &Path,
    is_new: bool,
    passwords: &mut P,
    max_attempts: u32,
) -> Result<Option<S::Vault>>
where
    S: VaultStore,
    P: PasswordSource,
{
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let password = passwords
            .read_password(PASSWORD_PROMPT)
            .context("Failed to read password")?;

        if is_new {
            let db = store
                .create(path, &password)
                .with_context(|| format!("Failed to create database: {}", path.display()))?;
            return Ok(Some(db));
        }

        match store.open(path, &password) {
            Ok(db) => {
                tracing::info!("Opened {} on attempt {}", path.display(), attempt);
                return Ok(Some(db));
            }
            Err(e) if e.is_credentials() => {
                tracing::warn!("Wrong password ({attempt}/{max_attempts})");
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to open database: {}", path.display()));
            }
        }
    }

    Ok(None)
}
