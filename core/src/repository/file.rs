use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{LyraError, Result};
use crate::model::task::Task;
use crate::repository::codec::{decode_line, encode_task};
use crate::repository::traits::{LoadReport, TaskRepository};

pub const DEFAULT_FILE_PATH: &str = "data/lyra.txt";

#[derive(Debug, Clone)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn storage_err(&self, source: std::io::Error) -> LyraError {
        LyraError::storage(&self.file_path, source)
    }

    // First run: make the parent directory and an empty file.
    fn create_empty(&self) -> Result<()> {
        if let Some(dir) = self.file_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|e| self.storage_err(e))?;
            }
        }
        File::create(&self.file_path).map_err(|e| self.storage_err(e))?;
        info!(path = %self.file_path.display(), "created empty task file");
        Ok(())
    }
}

impl Default for FileTaskRepository {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PATH)
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<LoadReport> {
        if !self.file_path.exists() {
            self.create_empty()?;
            return Ok(LoadReport::default());
        }

        let file = File::open(&self.file_path).map_err(|e| self.storage_err(e))?;
        let reader = BufReader::new(file);
        let mut report = LoadReport::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| self.storage_err(e))?;
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(&line, i + 1) {
                Ok(task) => report.tasks.push(task),
                Err(err) => {
                    warn!(path = %self.file_path.display(), "skipping line: {}", err);
                    report.skipped_lines.push(i + 1);
                }
            }
        }

        info!(
            path = %self.file_path.display(),
            loaded = report.tasks.len(),
            skipped = report.skipped_lines.len(),
            "loaded tasks"
        );
        Ok(report)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.file_path).map_err(|e| self.storage_err(e))?;
        let mut writer = BufWriter::new(file);
        for task in tasks {
            writeln!(writer, "{}", encode_task(task)).map_err(|e| self.storage_err(e))?;
        }
        writer.flush().map_err(|e| self.storage_err(e))?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
