pub mod repository;
pub mod store;

pub use repository::InMemoryTaskRepository;
pub use store::{TaskIdCounter, TaskStore};
