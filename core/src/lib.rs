pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{LyraError, Result};
pub use input::parse;
pub use model::strategy::SortCriterion;
pub use model::task::{Task, TaskKind};
pub use model::task_list::TaskList;
pub use repository::{FileTaskRepository, LoadReport, MemoryTaskRepository, TaskRepository};
pub use service::command::{Command, Response};
pub use service::dto::TaskDto;
pub use service::session::Session;
