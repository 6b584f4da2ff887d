use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::LyraError;
use crate::model::task::{Task, TaskKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    Description,
    Deadline,
    Event,
    Type,
    Status,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 5] = [
        SortCriterion::Description,
        SortCriterion::Deadline,
        SortCriterion::Event,
        SortCriterion::Type,
        SortCriterion::Status,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortCriterion::Description => "description",
            SortCriterion::Deadline => "deadline",
            SortCriterion::Event => "event",
            SortCriterion::Type => "type",
            SortCriterion::Status => "status",
        }
    }

    /// Ordering between two tasks. Callers must sort stably, ties keep list order.
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortCriterion::Description => a
                .description
                .to_lowercase()
                .cmp(&b.description.to_lowercase()),
            SortCriterion::Deadline => compare_dated(a.deadline_date(), b.deadline_date()),
            SortCriterion::Event => compare_dated(a.event_start(), b.event_start()),
            SortCriterion::Type => type_rank(a.kind()).cmp(&type_rank(b.kind())),
            SortCriterion::Status => a.done.cmp(&b.done),
        }
    }
}

impl FromStr for SortCriterion {
    type Err = LyraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortCriterion::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| LyraError::InvalidSortCriterion(s.trim().to_string()))
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Dated tasks first in ascending order, undated ones after them.
fn compare_dated<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn type_rank(kind: &TaskKind) -> u8 {
    match kind {
        TaskKind::Todo => 0,
        TaskKind::Deadline { .. } => 1,
        TaskKind::Event { .. } => 2,
    }
}

pub fn sort_tasks(tasks: &mut [Task], criterion: SortCriterion) {
    // slice::sort_by is stable
    tasks.sort_by(|a, b| criterion.compare(a, b));
}
