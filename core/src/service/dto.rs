use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::task::{Task, TaskKind};
use crate::time::format_display_date;

/// Flat view of a task for tables and JSON export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskDto {
    /// 1-based position, as users type it.
    pub number: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl TaskDto {
    pub fn from_entity(number: usize, task: &Task) -> Self {
        let (by, from, to) = match task.kind() {
            TaskKind::Todo => (None, None, None),
            TaskKind::Deadline { by } => (Some(*by), None, None),
            TaskKind::Event { from, to } => (None, Some(*from), Some(*to)),
        };
        Self {
            number,
            kind: task.kind().name().to_string(),
            description: task.description.clone(),
            done: task.done,
            by,
            from,
            to,
        }
    }

    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<Self> {
        tasks
            .into_iter()
            .enumerate()
            .map(|(i, task)| Self::from_entity(i + 1, task))
            .collect()
    }

    /// Human-readable date column: `Dec 25 2024` or `Jun 1 2024 - Jun 10 2024`.
    pub fn when(&self) -> String {
        match (self.by, self.from, self.to) {
            (Some(by), _, _) => format_display_date(by),
            (None, Some(from), Some(to)) => {
                format!("{} - {}", format_display_date(from), format_display_date(to))
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let by = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let dtos = TaskDto::from_tasks(&[Task::todo("Buy milk"), Task::deadline("Report", by)]);

        let json = serde_json::to_value(&dtos).unwrap();
        assert_eq!(json[0]["type"], "todo");
        assert!(json[0].get("by").is_none());
        assert_eq!(json[1]["number"], 2);
        assert_eq!(json[1]["by"], "2024-12-25");
        assert_eq!(dtos[1].when(), "Dec 25 2024");
    }
}
