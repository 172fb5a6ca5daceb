use std::sync::Arc;

use async_trait::async_trait;
use taskboard_core::{Result, Status, Task, TaskRepository};

use crate::TaskStore;

/// In-memory `TaskRepository` backed by a shared `TaskStore`. State lives for
/// the process lifetime only.
pub struct InMemoryTaskRepository {
    store: Arc<TaskStore>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(TaskStore::new()),
        }
    }

    pub fn with_store(store: Arc<TaskStore>) -> Self {
        Self { store }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, name: &str) -> Result<Task> {
        // The id is obtained before, and independently of, the map insert.
        let id = self.store.counter().next();
        let task = Task::new(id, name.to_string());
        self.store.add(task)
    }

    async fn update(&self, id: i64, status: Status) -> Result<Task> {
        self.store.update_status(id, status)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete(id)
    }

    async fn get(&self, id: i64) -> Result<Task> {
        self.store.get(id)
    }

    async fn list(&self) -> Result<Vec<Task>> {
        Ok(self.store.list())
    }
}
