use chrono::NaiveDate;
use tracing::debug;

use crate::error::{LyraError, Result};
use crate::model::strategy::SortCriterion;
use crate::model::task::Task;
use crate::model::task_list::TaskList;
use crate::repository::TaskRepository;
use crate::service::messages;

/// One parsed user request. Indices are 0-based; the parser converts from the
/// 1-based numbers users type, so they may be negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTodo { description: String },
    AddDeadline { description: String, by: NaiveDate },
    AddEvent { description: String, from: NaiveDate, to: NaiveDate },
    List,
    Mark { index: i64 },
    Unmark { index: i64 },
    Delete { index: i64 },
    Find { keyword: String },
    Sort { criterion: SortCriterion },
    Help,
    Exit,
}

/// Rendered result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub message: String,
    pub exit: bool,
}

impl Response {
    fn reply(message: String) -> Self {
        Self {
            message,
            exit: false,
        }
    }
}

impl Command {
    /// Runs the command: at most one list mutation, at most one save.
    ///
    /// A failed save is returned as an error, but the in-memory change has
    /// already been applied and is not rolled back.
    pub fn execute<R: TaskRepository + ?Sized>(
        &self,
        tasks: &mut TaskList,
        repo: &R,
    ) -> Result<Response> {
        debug!(command = ?self, "executing");
        let message = match self {
            Command::AddTodo { description } => add(tasks, repo, Task::todo(description.as_str()))?,
            Command::AddDeadline { description, by } => {
                add(tasks, repo, Task::deadline(description.as_str(), *by))?
            }
            Command::AddEvent {
                description,
                from,
                to,
            } => add(tasks, repo, Task::event(description.as_str(), *from, *to))?,
            Command::List => messages::task_list(tasks.iter()),
            Command::Mark { index } => {
                let index = resolve(*index, tasks)?;
                let message = messages::task_marked(tasks.mark_done(index)?);
                repo.save(tasks.tasks())?;
                message
            }
            Command::Unmark { index } => {
                let index = resolve(*index, tasks)?;
                let message = messages::task_marked(tasks.mark_not_done(index)?);
                repo.save(tasks.tasks())?;
                message
            }
            Command::Delete { index } => {
                let index = resolve(*index, tasks)?;
                let removed = tasks.delete(index)?;
                repo.save(tasks.tasks())?;
                messages::task_deleted(&removed, tasks.len())
            }
            Command::Find { keyword } => messages::matching_tasks(keyword, tasks.find(keyword)),
            Command::Sort { criterion } => {
                if tasks.is_empty() {
                    messages::nothing_to_sort()
                } else {
                    tasks.sort_by(*criterion);
                    repo.save(tasks.tasks())?;
                    messages::sorted(*criterion)
                }
            }
            Command::Help => messages::help(),
            Command::Exit => {
                return Ok(Response {
                    message: messages::goodbye(),
                    exit: true,
                })
            }
        };
        Ok(Response::reply(message))
    }
}

fn add<R: TaskRepository + ?Sized>(tasks: &mut TaskList, repo: &R, task: Task) -> Result<String> {
    let message = messages::task_added(&task, tasks.len() + 1);
    tasks.add(task);
    repo.save(tasks.tasks())?;
    Ok(message)
}

fn resolve(index: i64, tasks: &TaskList) -> Result<usize> {
    usize::try_from(index).map_err(|_| LyraError::IndexOutOfRange {
        index,
        size: tasks.len(),
    })
}
