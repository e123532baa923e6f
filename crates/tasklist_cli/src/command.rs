//! Line-oriented command parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};
use tasklist_core::TaskId;

/// One user intent read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the shared input value; `None` clears it.
    Type(Option<String>),
    /// Submit the current input, optionally replacing it first.
    Add(Option<String>),
    Done(TaskId),
    Delete(TaskId),
    Help,
    Quit,
    /// Blank line; nothing to do.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingId(&'static str),
    InvalidId(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(name) => write!(f, "unknown command `{name}`; try `help`"),
            Self::MissingId(name) => write!(f, "`{name}` needs a task id"),
            Self::InvalidId(raw) => write!(f, "invalid task id `{raw}`"),
        }
    }
}

impl Error for CommandError {}

pub const HELP: &str = "\
commands:
  type <text>   set the input text (filters the list)
  type          clear the input text
  add [<text>]  add the input text as a task
  done <id>     mark a task complete
  delete <id>   delete a task
  help          show this help
  quit          leave";

impl Command {
    /// Parses one input line. Only the line terminator is stripped from `<text>`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let head = line.trim_start();
        if head.is_empty() {
            return Ok(Self::Empty);
        }

        let (name, rest) = match head.find(char::is_whitespace) {
            Some(at) => {
                // Drop the one separator; the rest stays as typed.
                let mut tail = head[at..].chars();
                tail.next();
                (&head[..at], Some(tail.as_str()))
            }
            None => (head, None),
        };
        let text = rest.filter(|rest| !rest.is_empty()).map(str::to_string);

        match name {
            "type" => Ok(Self::Type(text)),
            "add" => Ok(Self::Add(text)),
            "done" => parse_id("done", rest).map(Self::Done),
            "delete" => parse_id("delete", rest).map(Self::Delete),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(name: &'static str, raw: Option<&str>) -> Result<TaskId, CommandError> {
    let raw = raw
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or(CommandError::MissingId(name))?;
    raw.parse::<TaskId>()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
