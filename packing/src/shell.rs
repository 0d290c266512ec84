//! Line-oriented front end for the terminal binary.
//!
//! Each input line becomes a [`Command`], which [`Shell::execute`] turns into
//! calls on the [`ListStore`]. The shell keeps the view settings (sort order)
//! and the add form; the list itself only ever sees store operations.

use crate::config::PackingConfig;
use crate::form::AddForm;
use crate::render;
use crate::store::ListStore;
use crate::types::{EntryId, ValidationError};
use crate::view::{ParseSortKeyError, SortKey};
use std::str::FromStr;
use thiserror::Error;

/// Shown for `help`
pub const HELP: &str = "\
Commands:
  add [qty] <description>   add an item (qty defaults to 1)
  toggle <id>               mark an item packed / unpacked
  remove <id>               remove an item
  clear                     remove every item (asks first)
  sort <input|description|packed>
  list                      show the list
  stats                     show progress
  help                      show this help
  quit                      leave";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an item
    Add {
        /// How many, when given
        quantity: Option<u32>,
        /// What to pack, possibly empty
        description: String,
    },
    /// Flip packed status
    Toggle(EntryId),
    /// Remove one item
    Remove(EntryId),
    /// Remove every item after confirmation
    Clear,
    /// Change display order
    Sort(SortKey),
    /// Show the list
    List,
    /// Show progress
    Stats,
    /// Show help
    Help,
    /// Leave the shell
    Quit,
}

/// Errors shown to the user; the shell keeps running after any of them
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// First word is not a command
    #[error("Unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    /// A command was missing or had a malformed argument
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// Sort order not recognized
    #[error(transparent)]
    Sort(#[from] ParseSortKeyError),

    /// Form input or new item rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "add" => Ok(parse_add(rest)),
            "toggle" => parse_id(rest, "toggle <id>").map(Self::Toggle),
            "remove" | "rm" => parse_id(rest, "remove <id>").map(Self::Remove),
            "clear" => Ok(Self::Clear),
            "sort" => {
                if rest.is_empty() {
                    return Err(ShellError::Usage("sort <input|description|packed>"));
                }
                Ok(Self::Sort(rest.parse()?))
            }
            "list" | "ls" => Ok(Self::List),
            "stats" => Ok(Self::Stats),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

/// `add 3 Wool socks` or `add Wool socks`
fn parse_add(rest: &str) -> Command {
    let (first, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    match first.parse::<u32>() {
        Ok(quantity) => Command::Add {
            quantity: Some(quantity),
            description: tail.trim().to_string(),
        },
        Err(_) => Command::Add {
            quantity: None,
            description: rest.to_string(),
        },
    }
}

fn parse_id(rest: &str, usage: &'static str) -> Result<EntryId, ShellError> {
    rest.parse().map_err(|_| ShellError::Usage(usage))
}

/// What the binary should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep going
    Output(String),
    /// Stop reading input
    Quit,
}

/// Interactive session state
#[derive(Debug)]
pub struct Shell {
    list: ListStore,
    form: AddForm,
    sort: SortKey,
}

impl Shell {
    /// A shell over `list` using `config` for view defaults
    #[must_use]
    pub fn new(list: ListStore, config: &PackingConfig) -> Self {
        Self {
            list,
            form: AddForm::new(config.max_quantity),
            sort: config.default_sort,
        }
    }

    /// Parse and run one input line
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] describing what to fix; nothing has changed.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, ShellError> {
        let command = line.parse::<Command>()?;
        self.execute(command)
    }

    /// Run one command
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] describing what to fix; nothing has changed.
    pub fn execute(&mut self, command: Command) -> Result<Reply, ShellError> {
        let output = match command {
            Command::Add {
                quantity,
                description,
            } => {
                self.form.set_quantity(quantity.unwrap_or(1))?;
                self.form.set_description(description);
                let id = self.form.submit(&mut self.list)?;
                format!("Added #{id}\n{}", self.render())
            }
            Command::Toggle(id) => match self.list.toggle(id) {
                Some(_) => self.render(),
                None => format!("No item #{id}"),
            },
            Command::Remove(id) => {
                if self.list.remove(id) {
                    self.render()
                } else {
                    format!("No item #{id}")
                }
            }
            Command::Clear => {
                if self.list.request_clear() {
                    format!("List cleared\n{}", self.render())
                } else {
                    "Clear cancelled".to_string()
                }
            }
            Command::Sort(key) => {
                self.sort = key;
                self.render()
            }
            Command::List => self.render(),
            Command::Stats => render::statistics_line(&self.list.statistics()),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(output))
    }

    /// The list in the current sort order, followed by progress
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}",
            render::entry_list(&self.list.project(self.sort)),
            render::statistics_line(&self.list.statistics())
        )
    }

    /// The list this shell drives
    #[must_use]
    pub const fn list(&self) -> &ListStore {
        &self.list
    }

    /// Current sort order
    #[must_use]
    pub const fn sort(&self) -> SortKey {
        self.sort
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::PackingState;
    use far_away_testing::ScriptedConfirmation;

    fn shell_with(confirm: ScriptedConfirmation) -> Shell {
        let list = ListStore::new(PackingState::starter()).with_confirmation(confirm);
        Shell::new(list, &PackingConfig::default())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            "add 3 Wool socks".parse::<Command>().unwrap(),
            Command::Add {
                quantity: Some(3),
                description: "Wool socks".to_string()
            }
        );
        assert_eq!(
            "add Tent".parse::<Command>().unwrap(),
            Command::Add {
                quantity: None,
                description: "Tent".to_string()
            }
        );
        assert_eq!(
            "  TOGGLE #2 ".parse::<Command>().unwrap(),
            Command::Toggle(EntryId::new(2))
        );
        assert_eq!(
            "sort packed".parse::<Command>().unwrap(),
            Command::Sort(SortKey::PackedStatus)
        );
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "pack socks".parse::<Command>(),
            Err(ShellError::UnknownCommand("pack".to_string()))
        );
        assert_eq!(
            "remove socks".parse::<Command>(),
            Err(ShellError::Usage("remove <id>"))
        );
        assert!(matches!(
            "sort size".parse::<Command>(),
            Err(ShellError::Sort(_))
        ));
    }

    #[test]
    fn add_then_list() {
        let mut shell = shell_with(ScriptedConfirmation::default());
        let Reply::Output(out) = shell.handle_line("add 2 Tent").unwrap() else {
            unreachable!("add never quits");
        };
        assert!(out.starts_with("Added #4"));
        assert!(out.contains("[ ] 2 Tent (#4)"));
    }

    #[test]
    fn add_without_description_is_an_error() {
        let mut shell = shell_with(ScriptedConfirmation::default());
        assert_eq!(
            shell.handle_line("add 2"),
            Err(ShellError::Validation(ValidationError::EmptyDescription))
        );
        assert_eq!(shell.list().len(), 3);
    }

    #[test]
    fn add_above_max_quantity_is_an_error() {
        let mut shell = shell_with(ScriptedConfirmation::default());
        assert!(matches!(
            shell.handle_line("add 21 Socks"),
            Err(ShellError::Validation(ValidationError::QuantityOutOfRange { .. }))
        ));
    }

    #[test]
    fn clear_respects_the_answer() {
        let mut shell = shell_with(ScriptedConfirmation::answering([false, true]));

        assert_eq!(
            shell.handle_line("clear").unwrap(),
            Reply::Output("Clear cancelled".to_string())
        );
        assert_eq!(shell.list().len(), 3);

        shell.handle_line("clear").unwrap();
        assert!(shell.list().is_empty());
    }

    #[test]
    fn sort_changes_only_the_view() {
        let mut shell = shell_with(ScriptedConfirmation::default());
        shell.handle_line("sort description").unwrap();

        assert_eq!(shell.sort(), SortKey::Description);
        let first = shell.render().lines().next().unwrap().to_string();
        assert_eq!(first, "[ ] 1 Charger (#3)");
        assert_eq!(shell.list().entries()[0].description, "Passports");
    }

    #[test]
    fn missing_ids_are_reported_not_errors() {
        let mut shell = shell_with(ScriptedConfirmation::default());
        assert_eq!(
            shell.handle_line("toggle 99").unwrap(),
            Reply::Output("No item #99".to_string())
        );
        assert_eq!(
            shell.handle_line("remove 99").unwrap(),
            Reply::Output("No item #99".to_string())
        );
    }

    #[test]
    fn stats_and_quit() {
        let mut shell = shell_with(ScriptedConfirmation::default());
        shell.handle_line("toggle 1").unwrap();
        assert_eq!(
            shell.handle_line("stats").unwrap(),
            Reply::Output(
                "You have 3 items on your list, and you already packed 1 (33%)".to_string()
            )
        );
        assert_eq!(shell.handle_line("quit").unwrap(), Reply::Quit);
    }
}
