pub mod error;
pub mod repository;
pub mod task;
pub mod usecase;

// Re-exports
pub use error::{Error, Result};
pub use repository::TaskRepository;
pub use task::{
    CreateTaskRequest, CreateTaskResponse, ListTaskResponse, Status, Task, UpdateTaskRequest,
    UpdateTaskResponse,
};
pub use usecase::TaskUsecase;
