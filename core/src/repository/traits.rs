use crate::error::Result;
use crate::model::task::Task;

/// Outcome of reading the task store.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub tasks: Vec<Task>,
    /// 1-based line numbers that could not be decoded and were skipped.
    pub skipped_lines: Vec<usize>,
}

pub trait TaskRepository {
    fn load(&self) -> Result<LoadReport>;
    /// Replaces the stored tasks with `tasks`, in order.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}
