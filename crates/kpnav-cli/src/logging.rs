//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Log level for our own crates at the given `-v` count.
pub fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn directives(verbosity: u8) -> Result<Vec<Directive>> {
    let level = level(verbosity);
    Ok(vec![
        format!("kpnav_cli={level}").parse()?,
        format!("kpnav_core={level}").parse()?,
    ])
}

/// Filter for the subscriber.
///
/// A non-empty `rust_log` is used as is; otherwise the `-v` count decides.
pub fn build_filter(verbosity: u8, rust_log: Option<&str>) -> Result<EnvFilter> {
    match rust_log.map(str::trim).filter(|spec| !spec.is_empty()) {
        Some(spec) => Ok(EnvFilter::try_new(spec)?),
        None => Ok(directives(verbosity)?
            .into_iter()
            .fold(EnvFilter::default(), EnvFilter::add_directive)),
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr so they never mix with the menus on stdout.
pub fn init(verbosity: u8) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbosity, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
