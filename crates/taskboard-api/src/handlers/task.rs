use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::state::ApiState;
use taskboard_core::{
    CreateTaskRequest, CreateTaskResponse, Error, ListTaskResponse, UpdateTaskRequest,
    UpdateTaskResponse,
};

type ErrorReply = (StatusCode, Json<Error>);

/// Create a task from `{name}`; name is required and non-empty.
pub async fn create_task(
    State(state): State<ApiState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateTaskResponse>), ErrorReply> {
    let Json(req) = payload.map_err(|_| reject(Error::InvalidPayload))?;
    if req.name.is_empty() {
        return Err(reject(Error::InvalidPayload));
    }

    match state.tasks.create(req).await {
        Ok(rtn) => Ok((StatusCode::CREATED, Json(rtn))),
        Err(err) => Err(reply(err)),
    }
}

/// List all tasks, sorted by id. An empty store yields `{"result": []}`.
pub async fn list_tasks(
    State(state): State<ApiState>,
) -> Result<Json<ListTaskResponse>, ErrorReply> {
    match state.tasks.list().await {
        Ok(rtn) => Ok(Json(rtn)),
        Err(err) => Err(reply(err)),
    }
}

/// Set a task's status. The path id must match the body id, and the body
/// name must match the stored name.
pub async fn update_task(
    State(state): State<ApiState>,
    Path(task_id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<UpdateTaskResponse>, ErrorReply> {
    let id = parse_task_id(&task_id)?;

    let Json(req) = payload.map_err(|_| reject(Error::InvalidPayload))?;
    if req.id < 1 || req.name.is_empty() {
        return Err(reject(Error::InvalidPayload));
    }
    if req.id != id {
        return Err(reject(Error::InvalidParameters));
    }

    match state.tasks.update(req).await {
        Ok(rtn) => Ok(Json(rtn)),
        Err(err) => Err(reply(err)),
    }
}

pub async fn delete_task(
    State(state): State<ApiState>,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ErrorReply> {
    let id = parse_task_id(&task_id)?;

    match state.tasks.delete(id).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(err) => Err(reply(err)),
    }
}

// Route parameters must be integral and at least 1.
fn parse_task_id(raw: &str) -> Result<i64, ErrorReply> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| reject(Error::InvalidParameters))
}

fn reject(err: Error) -> ErrorReply {
    (StatusCode::BAD_REQUEST, Json(err))
}

fn reply(err: Error) -> ErrorReply {
    let status = match err {
        Error::NotFound => StatusCode::NOT_FOUND,
        Error::InvalidParameters | Error::InvalidPayload | Error::NameMismatch => {
            StatusCode::BAD_REQUEST
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(err))
}
