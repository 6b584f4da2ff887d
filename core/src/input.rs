use crate::error::{LyraError, Result};
use crate::model::strategy::SortCriterion;
use crate::service::command::Command;
use crate::time::parse_date;

/// Turns one line of user input into a [`Command`]. Pure; never touches
/// the task list or storage.
pub fn parse(input: &str) -> Result<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LyraError::EmptyCommand);
    }

    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (input, ""),
    };

    match verb.to_lowercase().as_str() {
        "bye" => Ok(Command::Exit),
        "help" => Ok(Command::Help),
        "list" => Ok(Command::List),
        "todo" => parse_todo(rest),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "mark" => Ok(Command::Mark {
            index: parse_index(rest, "Please specify a task number to mark. Try: mark <task_number>")?,
        }),
        "unmark" => Ok(Command::Unmark {
            index: parse_index(rest, "Please specify a task number to unmark. Try: unmark <task_number>")?,
        }),
        "delete" => Ok(Command::Delete {
            index: parse_index(rest, "Please specify a task number to delete. Try: delete <task_number>")?,
        }),
        "find" => parse_find(rest),
        "sort" => parse_sort(rest),
        _ => Err(LyraError::UnknownCommand(verb.to_string())),
    }
}

fn parse_todo(rest: &str) -> Result<Command> {
    let description = rest.trim();
    if description.is_empty() {
        return Err(LyraError::MissingDescription { verb: "todo" });
    }
    Ok(Command::AddTodo {
        description: description.to_string(),
    })
}

fn parse_deadline(rest: &str) -> Result<Command> {
    let (description, by) = rest.split_once("/by").unwrap_or((rest, ""));
    let (description, by) = (description.trim(), by.trim());
    if description.is_empty() || by.is_empty() {
        return Err(LyraError::MissingDescription { verb: "deadline" });
    }
    Ok(Command::AddDeadline {
        description: description.to_string(),
        by: parse_date(by)?,
    })
}

fn parse_event(rest: &str) -> Result<Command> {
    let (description, range) = rest.split_once("/from").unwrap_or((rest, ""));
    let (from, to) = range.split_once("/to").unwrap_or((range, ""));
    let (description, from, to) = (description.trim(), from.trim(), to.trim());
    if description.is_empty() || from.is_empty() || to.is_empty() {
        return Err(LyraError::MissingDescription { verb: "event" });
    }
    Ok(Command::AddEvent {
        description: description.to_string(),
        from: parse_date(from)?,
        to: parse_date(to)?,
    })
}

// Users count from 1; the command carries the 0-based index.
fn parse_index(rest: &str, missing: &'static str) -> Result<i64> {
    let raw = rest.trim();
    if raw.is_empty() {
        return Err(LyraError::MissingArgument(missing));
    }
    let number: i64 = raw
        .parse()
        .map_err(|_| LyraError::InvalidTaskNumber(raw.to_string()))?;
    Ok(number.saturating_sub(1))
}

fn parse_find(rest: &str) -> Result<Command> {
    let keyword = rest.trim();
    if keyword.is_empty() {
        return Err(LyraError::MissingArgument(
            "Please provide a keyword to find. Try: find <keyword>",
        ));
    }
    Ok(Command::Find {
        keyword: keyword.to_string(),
    })
}

fn parse_sort(rest: &str) -> Result<Command> {
    if rest.trim().is_empty() {
        return Err(LyraError::MissingArgument(
            "Please specify a sort criteria. Available options: description, deadline, event, type, status",
        ));
    }
    let criterion: SortCriterion = rest.parse()?;
    Ok(Command::Sort { criterion })
}
