use std::fmt;

use chrono::NaiveDate;

use crate::time::format_display_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    // `from` after `to` is accepted as-is.
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    /// One-letter code shared by the display line and the task file.
    pub fn code(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline { .. } => "deadline",
            TaskKind::Event { .. } => "event",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    // The kind is fixed at construction, so only a shared borrow is handed out.
    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    pub fn deadline_date(&self) -> Option<NaiveDate> {
        match self.kind {
            TaskKind::Deadline { by } => Some(by),
            _ => None,
        }
    }

    pub fn event_start(&self) -> Option<NaiveDate> {
        match self.kind {
            TaskKind::Event { from, .. } => Some(from),
            _ => None,
        }
    }

    pub fn matches(&self, keyword: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&keyword.trim().to_lowercase())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.code(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_display_date(*by)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                format_display_date(*from),
                format_display_date(*to)
            ),
        }
    }
}
