//! Parsing of terminal input lines into controller actions.

use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  list                 refresh the note list
  new | cancel         clear the form (create mode)
  title <text>         set the form title
  content <text>       set the form content
  save                 create or update the note in the form
  edit <id>            load a note into the form
  delete <id>          delete a note (asks for confirmation)
  summarize <id>       summarize a note
  help                 show this help
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Reset,
    Title(String),
    Content(String),
    Save,
    Edit(String),
    Delete(String),
    Summarize(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let id_arg = |name: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("Usage: {} <id>", name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "new" | "cancel" => Ok(Command::Reset),
            // Form text is free-form and may be empty
            "title" => Ok(Command::Title(rest.to_string())),
            "content" => Ok(Command::Content(rest.to_string())),
            "save" => Ok(Command::Save),
            "edit" => id_arg("edit").map(Command::Edit),
            "delete" | "rm" => id_arg("delete").map(Command::Delete),
            "summarize" | "sum" => id_arg("summarize").map(Command::Summarize),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("Empty command. Type `help` for a list of commands.".to_string()),
            other => Err(format!(
                "Unknown command `{}`. Type `help` for a list of commands.",
                other
            )),
        }
    }
}
