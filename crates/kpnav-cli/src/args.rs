//! Command line arguments and database path resolution.

use crate::prompt::Prompter;
use anyhow::{bail, Result};
use clap::{ArgAction, Parser};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const FILE_PROMPT: &str = "What file do you want to open? ";

/// kpnav - browse KeePass databases from the terminal
#[derive(Parser, Debug)]
#[command(name = "kpnav", version)]
#[command(about = "Read KeePass databases")]
pub struct Args {
    /// File to open
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Create a new database instead of opening one
    #[arg(short, long)]
    pub new: bool,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Decides which database file to use, asking the user when needed.
#[derive(Debug, Clone)]
pub struct PathResolver {
    is_new: bool,
    program_dir: Option<PathBuf>,
}

impl PathResolver {
    /// Resolver that also looks next to the running executable.
    pub fn new(is_new: bool) -> Self {
        let program_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::with_program_dir(is_new, program_dir)
    }

    pub fn with_program_dir(is_new: bool, program_dir: Option<PathBuf>) -> Self {
        Self {
            is_new,
            program_dir,
        }
    }

    /// The path to use for `candidate`, or `None` if it cannot be used.
    ///
    /// In new mode every path is accepted. Otherwise the candidate must be
    /// an existing file, either as given or inside the program directory.
    pub fn locate(&self, candidate: &Path) -> Option<PathBuf> {
        if self.is_new || candidate.is_file() {
            return Some(candidate.to_path_buf());
        }
        if candidate.is_absolute() {
            return None;
        }

        let beside_program = self.program_dir.as_ref()?.join(candidate);
        beside_program.is_file().then_some(beside_program)
    }

    /// Start from `initial` (the `--file` flag) and prompt until a usable
    /// path is given.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        initial: Option<PathBuf>,
        prompter: &mut Prompter<R, W>,
    ) -> Result<PathBuf> {
        let mut candidate = initial.filter(|path| !path.as_os_str().is_empty());

        loop {
            if let Some(path) = candidate.take() {
                if let Some(found) = self.locate(&path) {
                    tracing::debug!("Using database file {}", found.display());
                    return Ok(found);
                }
                prompter.say(format_args!("{} not found on the system", path.display()))?;
            }

            let Some(answer) = prompter.ask(FILE_PROMPT)? else {
                bail!("standard input closed");
            };
            let answer = answer.trim();
            if !answer.is_empty() {
                candidate = Some(PathBuf::from(answer));
            }
        }
    }
}
