use tracing::{info, warn};

use crate::input::parse;
use crate::model::task_list::TaskList;
use crate::repository::TaskRepository;
use crate::service::command::Response;
use crate::service::messages;

/// Owns the task list for one run of the program. Every front end feeds raw
/// lines through [`Session::handle`], so this is the only place tasks change.
pub struct Session<R: TaskRepository> {
    repo: R,
    tasks: TaskList,
    startup_notice: Option<String>,
    finished: bool,
}

impl<R: TaskRepository> Session<R> {
    /// Loads the stored tasks. A storage failure is not fatal: the session
    /// starts empty and the failure is kept as a startup notice.
    pub fn open(repo: R) -> Self {
        let (tasks, startup_notice) = match repo.load() {
            Ok(report) => {
                let notice = if report.skipped_lines.is_empty() {
                    None
                } else {
                    Some(messages::skipped_lines(&report.skipped_lines))
                };
                (TaskList::from(report.tasks), notice)
            }
            Err(err) => {
                warn!("failed to load tasks: {}", err);
                (TaskList::new(), Some(messages::loading_failed(&err.to_string())))
            }
        };
        info!(count = tasks.len(), "session opened");

        Self {
            repo,
            tasks,
            startup_notice,
            finished: false,
        }
    }

    /// Parses and runs one line. Errors come back as an ordinary response.
    pub fn handle(&mut self, input: &str) -> Response {
        let result = parse(input).and_then(|command| command.execute(&mut self.tasks, &self.repo));
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                if !err.is_parse_error() {
                    warn!("command failed: {}", err);
                }
                Response {
                    message: err.to_string(),
                    exit: false,
                }
            }
        };
        if response.exit {
            self.finished = true;
        }
        response
    }

    pub fn startup_notice(&self) -> Option<&str> {
        self.startup_notice.as_deref()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
