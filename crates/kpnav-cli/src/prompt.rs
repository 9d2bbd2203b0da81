//! Line-oriented terminal input and output.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reads answers from `input` and writes prompts and menus to `output`.
///
/// Generic so tests can drive it with a `Cursor` and capture a `Vec<u8>`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// Returns `None` once the input is exhausted. The line terminator is
    /// stripped.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// The output sink, e.g. to inspect what a test printed.
    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Source of masked passwords.
pub trait PasswordSource {
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;
}

/// Reads passwords from the controlling terminal without echo.
#[derive(Debug, Default)]
pub struct TerminalPasswords;

impl PasswordSource for TerminalPasswords {
    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        rpassword::prompt_password(prompt)
    }
}
