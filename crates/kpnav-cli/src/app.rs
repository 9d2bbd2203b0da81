//! Top-level flow: pick a file, unlock it, browse it.

use crate::args::{Args, PathResolver};
use crate::config::Config;
use crate::navigator;
use crate::prompt::{PasswordSource, Prompter};
use crate::session;
use anyhow::Result;
use kpnav_core::VaultStore;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user chose Quit.
    Quit,
    /// Every password attempt was rejected.
    Locked { path: PathBuf, attempts: u32 },
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Quit => ExitCode::SUCCESS,
            Outcome::Locked { .. } => ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Quit => f.write_str("Bye"),
            Outcome::Locked { path, attempts } => write!(
                f,
                "Could not unlock {} after {} attempts",
                path.display(),
                attempts
            ),
        }
    }
}

/// Run the whole session with the given collaborators.
pub fn run<S, P, R, W>(
    args: Args,
    config: &Config,
    resolver: &PathResolver,
    store: &S,
    passwords: &mut P,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome>
where
    S: VaultStore,
    P: PasswordSource,
    R: BufRead,
    W: Write,
{
    let path = resolver.resolve(args.file, prompter)?;
    tracing::info!("Starting kpnav with database: {}", path.display());

    let attempts = config.max_password_attempts;
    let Some(db) = session::open_or_create(store, &path, args.new, passwords, attempts)? else {
        return Ok(Outcome::Locked { path, attempts });
    };

    navigator::run(&db, prompter, &config.display_options())?;
    Ok(Outcome::Quit)
}
