//! Group → entry → details navigation.

use crate::menu::{MenuOptions, Selection};
use crate::prompt::Prompter;
use anyhow::Result;
use kpnav_core::{Entry, EntryFields, Group, Vault};
use std::io::{BufRead, Write};

/// How the menus present the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Append ` (<username>)` to entry labels.
    pub show_usernames: bool,
    /// Group names left out of the group menu.
    pub hidden_groups: Vec<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_usernames: true,
            hidden_groups: Vec::new(),
        }
    }
}

impl DisplayOptions {
    fn entry_label(&self, entry: &Entry) -> String {
        if self.show_usernames && !entry.username.is_empty() {
            format!("{} ({})", entry.title, entry.username)
        } else {
            entry.title.clone()
        }
    }

    fn is_visible(&self, group: &Group) -> bool {
        !self.hidden_groups.iter().any(|name| *name == group.name)
    }
}

/// Where the user currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    SelectGroup,
    SelectEntry(Group),
    ShowEntry(Entry),
}

/// Run the menus until the user quits.
pub fn run<V, R, W>(vault: &V, prompter: &mut Prompter<R, W>, options: &DisplayOptions) -> Result<()>
where
    V: Vault,
    R: BufRead,
    W: Write,
{
    let mut screen = Screen::SelectGroup;

    loop {
        tracing::trace!("Screen: {:?}", screen);
        screen = match screen {
            Screen::SelectGroup => {
                let groups: Vec<Group> = vault
                    .groups()
                    .into_iter()
                    .filter(|group| options.is_visible(group))
                    .collect();

                prompter.say("Select a group:")?;
                match prompter.select(&groups, MenuOptions::default())? {
                    Selection::Item(group) => Screen::SelectEntry(group.clone()),
                    // Back is not offered at the top level.
                    Selection::Back => Screen::SelectGroup,
                    Selection::Quit => break,
                }
            }
            Screen::SelectEntry(group) => {
                let entries = vault.entries(&group);
                tracing::debug!("Group {} has {} entries", group.path, entries.len());

                prompter.say("Select an entry:")?;
                let menu = MenuOptions::default().with_back();
                match prompter.select_labeled(&entries, |e| options.entry_label(e), menu)? {
                    Selection::Item(entry) => Screen::ShowEntry(entry.clone()),
                    Selection::Back => Screen::SelectGroup,
                    Selection::Quit => break,
                }
            }
            Screen::ShowEntry(entry) => {
                match vault.entry_fields(&entry) {
                    Some(fields) => show_fields(prompter, &fields)?,
                    None => tracing::warn!("Entry {} is no longer in the database", entry.uuid),
                }

                let nothing: [&str; 0] = [];
                match prompter.select(&nothing, MenuOptions::default().with_back())? {
                    Selection::Quit => break,
                    Selection::Item(_) | Selection::Back => Screen::SelectGroup,
                }
            }
        };
    }

    tracing::debug!("Quit requested");
    Ok(())
}

fn show_fields<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    fields: &EntryFields,
) -> std::io::Result<()> {
    prompter.say(format_args!("Data for {}", fields.title))?;
    prompter.say(&fields.url)?;
    prompter.say(&fields.password)?;
    prompter.say("-".repeat(10))
}
