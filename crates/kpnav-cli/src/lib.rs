//! kpnav - browse KeePass databases through numbered terminal menus.
//!
//! The binary wires these modules together; they are exposed as a library
//! so the flows can be driven from tests with scripted input.

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod menu;
pub mod navigator;
pub mod prompt;
pub mod session;

pub use args::{Args, PathResolver};
pub use config::Config;
pub use menu::{MenuOptions, Selection};
pub use navigator::DisplayOptions;
pub use prompt::{PasswordSource, Prompter, TerminalPasswords};
