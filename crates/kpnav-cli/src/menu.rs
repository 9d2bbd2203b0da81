//! Numbered menus.
//!
//! A menu prints its options as `1. <label>`, `2. <label>`, ..., optionally
//! followed by `Back` and `Quit`, then reads a number until it names one of
//! the printed lines.

use crate::prompt::Prompter;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Outcome of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    /// One of the listed options.
    Item(T),
    /// The user asked to return to the previous menu.
    Back,
    /// The user asked to leave the program.
    Quit,
}

/// Which extra lines a menu offers after its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions {
    pub allow_quit: bool,
    pub allow_back: bool,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            allow_quit: true,
            allow_back: false,
        }
    }
}

impl MenuOptions {
    pub fn with_back(mut self) -> Self {
        self.allow_back = true;
        self
    }

    pub fn without_quit(mut self) -> Self {
        self.allow_quit = false;
        self
    }
}

/// 1-based positions of the lines a menu prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    options: usize,
    back: Option<usize>,
    quit: Option<usize>,
}

impl Layout {
    fn new(options: usize, menu: MenuOptions) -> Self {
        let back = menu.allow_back.then_some(options + 1);
        let quit = menu.allow_quit.then_some(back.unwrap_or(options) + 1);
        Self {
            options,
            back,
            quit,
        }
    }

    fn last(&self) -> usize {
        self.quit.or(self.back).unwrap_or(self.options)
    }

    /// Map a typed number to a selection index, `None` if it names no line.
    fn resolve(&self, choice: i64) -> Option<Selection<usize>> {
        // Negative numbers must never index from the end of the list.
        if choice < 1 {
            return None;
        }
        let choice = usize::try_from(choice).ok()?;
        if choice <= self.options {
            Some(Selection::Item(choice - 1))
        } else if Some(choice) == self.back {
            Some(Selection::Back)
        } else if Some(choice) == self.quit {
            Some(Selection::Quit)
        } else {
            None
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Show `options` by their `Display` form and let the user pick one.
    pub fn select<'a, T: Display>(
        &mut self,
        options: &'a [T],
        menu: MenuOptions,
    ) -> io::Result<Selection<&'a T>> {
        self.select_labeled(options, |option| option.to_string(), menu)
    }

    /// Show `options` using `label` and let the user pick one.
    ///
    /// Input that is not a number, or a number outside the printed range, is
    /// asked for again without comment. End of input counts as `Quit`.
    pub fn select_labeled<'a, T>(
        &mut self,
        options: &'a [T],
        label: impl Fn(&T) -> String,
        menu: MenuOptions,
    ) -> io::Result<Selection<&'a T>> {
        let layout = Layout::new(options.len(), menu);
        let last = layout.last();
        if last == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "menu has no selectable options",
            ));
        }

        for (index, option) in options.iter().enumerate() {
            self.say(format_args!("{}. {}", index + 1, label(option)))?;
        }
        if let Some(back) = layout.back {
            self.say(format_args!("{back}. Back"))?;
        }
        if let Some(quit) = layout.quit {
            self.say(format_args!("{quit}. Quit"))?;
        }

        let prompt = format!("Select option [1-{last}]:");
        loop {
            let Some(answer) = self.ask(&prompt)? else {
                tracing::debug!("Input closed at menu, treating as quit");
                return Ok(Selection::Quit);
            };

            let Ok(choice) = answer.trim().parse::<i64>() else {
                continue;
            };

            match layout.resolve(choice) {
                Some(Selection::Item(index)) => return Ok(Selection::Item(&options[index])),
                Some(Selection::Back) => return Ok(Selection::Back),
                Some(Selection::Quit) => return Ok(Selection::Quit),
                None => tracing::trace!("Menu choice {} out of range 1-{}", choice, last),
            }
        }
    }
}
