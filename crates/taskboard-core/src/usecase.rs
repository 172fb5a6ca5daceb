use std::sync::Arc;

use crate::{
    CreateTaskRequest, CreateTaskResponse, Error, ListTaskResponse, Result, Task, TaskRepository,
    UpdateTaskRequest, UpdateTaskResponse,
};

/// Application rules over the repository: the name-match precondition on
/// updates, and response envelope shaping.
pub struct TaskUsecase {
    repository: Arc<dyn TaskRepository>,
}

impl TaskUsecase {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<ListTaskResponse> {
        let result = self.repository.list().await?;
        Ok(ListTaskResponse { result })
    }

    pub async fn create(&self, req: CreateTaskRequest) -> Result<CreateTaskResponse> {
        let result = self.repository.create(&req.name).await?;

        tracing::info!("created task: {} ({})", result.name, result.id);

        Ok(CreateTaskResponse { result })
    }

    /// The stored name must match the request name before any status change
    /// is applied. A status equal to the current one is a valid no-op write.
    pub async fn update(&self, req: UpdateTaskRequest) -> Result<UpdateTaskResponse> {
        let existing = self.repository.get(req.id).await?;
        if existing.name != req.name {
            return Err(Error::NameMismatch);
        }

        let result = self.repository.update(req.id, req.status).await?;
        Ok(UpdateTaskResponse { result })
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;

        tracing::info!("deleted task {}", id);

        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<Task> {
        self.repository.get(id).await
    }
}
