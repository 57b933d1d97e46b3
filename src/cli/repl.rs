//! Line parser for the interactive shell.

use crate::errors::{AppError, AppResult};
use crate::models::{SlotField, SlotId};
use crate::utils::formatting::parse_rate;
use crate::utils::time::normalize_time_input;

/// One line typed into the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add,
    Remove(SlotId),
    /// Value is normalized to `HH:MM`, or empty to clear the field.
    Update(SlotId, SlotField, String),
    Rate(f64),
    Currency(String),
    Show,
    Currencies,
    Help,
    Quit,
    Nothing,
}

pub const HELP: &str = "\
Commands:
  add                               add an empty slot
  remove <id>        (rm)           remove a slot (the last one is kept)
  update <id> <start|end> [HH:MM]   set a time, omit or '-' to clear it
  start <id> [HH:MM]                shortcut for update <id> start
  end <id> [HH:MM]                  shortcut for update <id> end
  rate <value>                      set the hourly rate
  currency <symbol>                 set the currency symbol
  currencies                        list suggested currency symbols
  show                              print slots and totals
  help                              this text
  quit               (exit, q)      leave the shell";

fn parse_id(word: Option<&str>, cmd: &str) -> AppResult<SlotId> {
    let raw = word.ok_or_else(|| AppError::MissingArgument(cmd.to_string()))?;
    raw.trim_start_matches('#')
        .parse::<u64>()
        .map(SlotId)
        .map_err(|_| AppError::InvalidSlotId(raw.to_string()))
}

fn parse_value(word: Option<&str>) -> AppResult<String> {
    normalize_time_input(word.unwrap_or(""))
}

impl ShellCommand {
    pub fn parse(line: &str) -> AppResult<Self> {
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            return Ok(ShellCommand::Nothing);
        };
        let cmd = cmd.to_lowercase();

        let parsed = match cmd.as_str() {
            "add" | "a" | "+" => ShellCommand::Add,
            "remove" | "rm" | "del" => ShellCommand::Remove(parse_id(words.next(), &cmd)?),
            "update" | "set" => {
                let id = parse_id(words.next(), &cmd)?;
                let field: SlotField = words
                    .next()
                    .ok_or_else(|| AppError::MissingArgument(cmd.clone()))?
                    .parse()?;
                ShellCommand::Update(id, field, parse_value(words.next())?)
            }
            "start" | "end" => {
                let id = parse_id(words.next(), &cmd)?;
                let field: SlotField = cmd.parse()?;
                ShellCommand::Update(id, field, parse_value(words.next())?)
            }
            "rate" => {
                let raw = words
                    .next()
                    .ok_or_else(|| AppError::MissingArgument(cmd.clone()))?;
                ShellCommand::Rate(parse_rate(raw))
            }
            "currency" | "cur" => {
                let symbol = words
                    .next()
                    .ok_or_else(|| AppError::MissingArgument(cmd.clone()))?;
                ShellCommand::Currency(symbol.to_string())
            }
            "show" | "ls" => ShellCommand::Show,
            "currencies" => ShellCommand::Currencies,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(AppError::UnknownCommand(other.to_string())),
        };

        Ok(parsed)
    }

    /// Commands that change the session state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ShellCommand::Add
                | ShellCommand::Remove(_)
                | ShellCommand::Update(..)
                | ShellCommand::Rate(_)
                | ShellCommand::Currency(_)
        )
    }
}
