//! Line format of the task file.
//!
//! ```text
//! T | <0|1> | <description>
//! D | <0|1> | <description> | <yyyy-MM-dd>
//! E | <0|1> | <description> | <yyyy-MM-dd> to <yyyy-MM-dd>
//! ```
//!
//! Pipes inside a description are written as-is. Decoding still recovers
//! them: the type code and flag are always the first two fields and the date
//! field, when present, is always the last.

use crate::error::{LyraError, Result};
use crate::model::task::{Task, TaskKind};
use crate::time::{format_storage_date, parse_date};

const SEPARATOR: &str = " | ";
const RANGE_SEPARATOR: &str = " to ";

pub fn encode_task(task: &Task) -> String {
    let flag = if task.done { "1" } else { "0" };
    let code = task.kind().code().to_string();
    let mut fields = vec![code, flag.to_string(), task.description.clone()];
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => fields.push(format_storage_date(*by)),
        TaskKind::Event { from, to } => fields.push(format!(
            "{}{}{}",
            format_storage_date(*from),
            RANGE_SEPARATOR,
            format_storage_date(*to)
        )),
    }
    fields.join(SEPARATOR)
}

/// Decodes one line. `line_no` is 1-based and only used for error reporting.
pub fn decode_line(line: &str, line_no: usize) -> Result<Task> {
    let corrupt = |reason: String| LyraError::CorruptRecord {
        line: line_no,
        reason,
    };

    let mut head = line.splitn(3, '|');
    let code = head.next().unwrap_or_default().trim();
    let (flag, rest) = match (head.next(), head.next()) {
        (Some(flag), Some(rest)) => (flag.trim(), rest),
        _ => {
            return Err(corrupt(format!(
                "expected at least 3 fields, found {}",
                line.split('|').count()
            )))
        }
    };

    let (description, kind) = match code.to_ascii_uppercase().as_str() {
        "T" => (rest, TaskKind::Todo),
        "D" => {
            let (description, by) = rest
                .rsplit_once('|')
                .ok_or_else(|| corrupt("deadline without a date".to_string()))?;
            let kind = TaskKind::Deadline {
                by: parse_field_date(by).map_err(corrupt)?,
            };
            (description, kind)
        }
        "E" => {
            let (description, range) = rest
                .rsplit_once('|')
                .ok_or_else(|| corrupt("event without a date range".to_string()))?;
            let range = range.trim();
            let (from, to) = range
                .rsplit_once(RANGE_SEPARATOR)
                .ok_or_else(|| corrupt(format!("malformed event range '{}'", range)))?;
            let kind = TaskKind::Event {
                from: parse_field_date(from).map_err(corrupt)?,
                to: parse_field_date(to).map_err(corrupt)?,
            };
            (description, kind)
        }
        other => return Err(corrupt(format!("unknown task type '{}'", other))),
    };

    let mut task = Task::new(description.trim(), kind);
    if flag == "1" {
        task.mark_done();
    }
    Ok(task)
}

fn parse_field_date(raw: &str) -> std::result::Result<chrono::NaiveDate, String> {
    parse_date(raw).map_err(|_| format!("invalid date '{}'", raw.trim()))
}
