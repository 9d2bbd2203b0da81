//! kpnav - browse KeePass databases from the terminal.

use anyhow::Result;
use clap::Parser;
use kpnav_cli::app::{self, Outcome};
use kpnav_cli::{logging, Args, Config, PathResolver, Prompter, TerminalPasswords};
use kpnav_core::KeepassStore;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let config = Config::load(args.config.clone())?;
    let resolver = PathResolver::new(args.new);
    let mut prompter = Prompter::stdio();

    let outcome = app::run(
        args,
        &config,
        &resolver,
        &KeepassStore,
        &mut TerminalPasswords,
        &mut prompter,
    )?;

    if let Outcome::Locked { .. } = outcome {
        eprintln!("{outcome}");
    }
    Ok(outcome.exit_code())
}
