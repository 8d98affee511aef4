use shortener_core::{AppViewModel, Msg};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shorten(String),
    Input(String),
    Submit,
    Copy(usize),
    Delete(usize),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a row number")]
    BadRow(String),
    #[error("there is no row {0}")]
    NoSuchRow(usize),
    #[error("still shortening the previous URL, try again when it is done")]
    StillShortening,
}

/// What the terminal loop should do with one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "shorten" | "add" => Ok(Command::Shorten(required(rest, "shorten")?.to_string())),
        "input" => Ok(Command::Input(rest.to_string())),
        "submit" => Ok(Command::Submit),
        "copy" => Ok(Command::Copy(row_number(required(rest, "copy")?)?)),
        "delete" | "rm" => Ok(Command::Delete(row_number(required(rest, "delete")?)?)),
        "show" | "list" | "" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ if rest.is_empty() && looks_like_url(word) => Ok(Command::Shorten(word.to_string())),
        _ => Err(CommandError::Unknown(word.to_string())),
    }
}

/// Turns a line into messages, resolving row numbers against the current view.
///
/// While a delete confirmation is open the line is read as its answer.
pub fn interpret(line: &str, view: &AppViewModel) -> Result<Action, CommandError> {
    if view.confirm_prompt {
        return Ok(Action::Dispatch(vec![confirmation_answer(line)]));
    }

    let action = match parse_command(line)? {
        Command::Shorten(_) | Command::Submit if !view.submit_enabled => {
            return Err(CommandError::StillShortening);
        }
        Command::Shorten(url) => Action::Dispatch(vec![Msg::InputChanged(url), Msg::SubmitClicked]),
        Command::Input(text) => Action::Dispatch(vec![Msg::InputChanged(text)]),
        Command::Submit => Action::Dispatch(vec![Msg::SubmitClicked]),
        Command::Copy(number) => {
            let row = row_at(view, number)?;
            Action::Dispatch(vec![Msg::CopyClicked {
                short_url: row.short_url.clone(),
            }])
        }
        Command::Delete(number) => {
            let row = row_at(view, number)?;
            Action::Dispatch(vec![Msg::DeleteClicked {
                short_code: row.short_code.clone(),
            }])
        }
        Command::Show => Action::Show,
        Command::Help => Action::Help,
        Command::Quit => Action::Quit,
    };
    Ok(action)
}

pub fn confirmation_answer(line: &str) -> Msg {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Msg::DeleteConfirmed,
        _ => Msg::DeleteCancelled,
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn row_number(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadRow(raw.to_string())),
    }
}

fn row_at(view: &AppViewModel, number: usize) -> Result<&shortener_core::LinkRowView, CommandError> {
    view.rows
        .get(number - 1)
        .ok_or(CommandError::NoSuchRow(number))
}

fn looks_like_url(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
