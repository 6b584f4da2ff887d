pub mod codec;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileTaskRepository;
pub use memory::MemoryTaskRepository;
pub use traits::{LoadReport, TaskRepository};
