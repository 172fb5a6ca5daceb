use async_trait::async_trait;

use crate::{Result, Status, Task};

/// Capability set any task storage backend satisfies. The use case and HTTP
/// layer depend only on this trait, never on a concrete store.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Assigns the next id and stores a new incomplete task.
    async fn create(&self, name: &str) -> Result<Task>;

    /// Sets the status of an existing task. Fails with `NotFound` if the id
    /// does not exist.
    async fn update(&self, id: i64, status: Status) -> Result<Task>;

    /// Removes a task permanently. Fails with `NotFound` if absent.
    async fn delete(&self, id: i64) -> Result<()>;

    async fn get(&self, id: i64) -> Result<Task>;

    /// All tasks sorted ascending by id; empty vec when none exist.
    async fn list(&self) -> Result<Vec<Task>>;
}
