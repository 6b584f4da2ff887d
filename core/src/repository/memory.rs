use std::cell::{Cell, RefCell};
use std::io;

use crate::error::{LyraError, Result};
use crate::model::task::Task;
use crate::repository::codec::{decode_line, encode_task};
use crate::repository::traits::{LoadReport, TaskRepository};

/// Test double that keeps the encoded lines in memory.
#[derive(Debug, Default)]
pub struct MemoryTaskRepository {
    lines: RefCell<Vec<String>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: &[Task]) -> Self {
        let repo = Self::new();
        *repo.lines.borrow_mut() = tasks.iter().map(encode_task).collect();
        repo
    }

    /// Stored lines as they would appear in the task file.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Makes every following `save` fail, to exercise storage error paths.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn load(&self) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        for (i, line) in self.lines.borrow().iter().enumerate() {
            match decode_line(line, i + 1) {
                Ok(task) => report.tasks.push(task),
                Err(_) => report.skipped_lines.push(i + 1),
            }
        }
        Ok(report)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(LyraError::storage(
                "<memory>",
                io::Error::new(io::ErrorKind::PermissionDenied, "saves disabled"),
            ));
        }
        *self.lines.borrow_mut() = tasks.iter().map(encode_task).collect();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
