use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LyraError>;

/// Every failure the core can report. The `Display` text is what the user sees.
#[derive(Debug, Error)]
pub enum LyraError {
    // Parse errors
    #[error(
        "Please enter a command. Type 'help' to see all available commands, \
         or try: list, todo, deadline, event, mark, unmark, delete, find, sort, bye."
    )]
    EmptyCommand,

    #[error(
        "Sorry, I couldn't recognize that command. Type 'help' to see all available commands, \
         or try: list, todo, deadline, event, mark, unmark, delete, find, sort, bye."
    )]
    UnknownCommand(String),

    #[error("{}", missing_description_message(.verb))]
    MissingDescription { verb: &'static str },

    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("Invalid date '{0}'. Please use yyyy-MM-dd, e.g., 2019-10-15.")]
    InvalidDate(String),

    #[error("Invalid task number.")]
    InvalidTaskNumber(String),

    #[error("Invalid sort criteria '{0}'. Available options: description, deadline, event, type, status")]
    InvalidSortCriterion(String),

    // Domain errors
    #[error("Invalid task number. You have {size} task(s) in the list.")]
    IndexOutOfRange { index: i64, size: usize },

    // Storage errors
    #[error("Error accessing task file {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt record on line {line}: {reason}")]
    CorruptRecord { line: usize, reason: String },
}

impl LyraError {
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LyraError::Storage {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the text the user typed.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            LyraError::EmptyCommand
                | LyraError::UnknownCommand(_)
                | LyraError::MissingDescription { .. }
                | LyraError::MissingArgument(_)
                | LyraError::InvalidDate(_)
                | LyraError::InvalidTaskNumber(_)
                | LyraError::InvalidSortCriterion(_)
        )
    }
}

fn missing_description_message(verb: &str) -> String {
    match verb {
        "deadline" => {
            "Sorry, a deadline needs a description and '/by'. Try: deadline <description> /by <yyyy-MM-dd>".to_string()
        }
        "event" => "Sorry, an event needs a description and times. Try: event <description> /from <yyyy-MM-dd> /to <yyyy-MM-dd>".to_string(),
        _ => "Sorry, a todo needs a description. Try: todo <description>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        let err = LyraError::MissingDescription { verb: "deadline" };
        assert!(err.to_string().contains("/by"));

        let err = LyraError::UnknownCommand("blah".to_string());
        assert!(err.to_string().contains("sort"));
        assert!(err.is_parse_error());

        let err = LyraError::IndexOutOfRange { index: 4, size: 2 };
        assert_eq!(
            err.to_string(),
            "Invalid task number. You have 2 task(s) in the list."
        );
        assert!(!err.is_parse_error());
    }
}
