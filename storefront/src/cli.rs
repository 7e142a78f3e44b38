// storefront/src/cli.rs

//! Line commands for the terminal front end.

use crate::shop::ShopEvent;

pub const HELP: &str = "commands: add <id> | + <id>, remove <id> | - <id>, retry, quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Shop(ShopEvent),
  Quit,
  Help,
}

/// Parses one input line. `None` for blank lines or anything unrecognised.
pub fn parse_command(line: &str) -> Option<Command> {
  let mut words = line.split_whitespace();
  let verb = words.next()?;
  let arg = words.next();
  if words.next().is_some() {
    return None;
  }

  let id = || arg.and_then(|raw| raw.parse::<i64>().ok());
  match (verb.to_ascii_lowercase().as_str(), arg) {
    ("add" | "+", Some(_)) => id().map(|id| Command::Shop(ShopEvent::Add(id))),
    ("remove" | "-", Some(_)) => id().map(|id| Command::Shop(ShopEvent::Remove(id))),
    ("retry" | "reload", None) => Some(Command::Shop(ShopEvent::Reload)),
    ("quit" | "exit" | "q", None) => Some(Command::Quit),
    ("help" | "?", None) => Some(Command::Help),
    _ => None,
  }
}
