use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use taskboard_api::{routes, state::ApiState};
use taskboard_core::TaskUsecase;
use taskboard_store::InMemoryTaskRepository;

fn test_router() -> Router {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let tasks = Arc::new(TaskUsecase::new(repository));
    routes::create_router(ApiState { tasks })
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    // Clones share the underlying state through the Arc.
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, parsed)
}

async fn create_task(router: &Router, name: &str) -> (StatusCode, Value) {
    send(router, Method::POST, "/task", Some(json!({ "name": name }))).await
}

#[tokio::test]
async fn test_health_check() {
    let router = test_router();
    let (status, body) = send(&router, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_task_ok() {
    let router = test_router();
    let (status, body) = create_task(&router, "TaskName1").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"result": {"id": 1, "status": 0, "name": "TaskName1"}})
    );
}

#[tokio::test]
async fn test_create_task_empty_name() {
    let router = test_router();
    let (status, body) = create_task(&router, "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "ERR_TASK_0002");
}

#[tokio::test]
async fn test_create_task_missing_name() {
    let router = test_router();
    let (status, body) = send(&router, Method::POST, "/task", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "ERR_TASK_0002");
}

#[tokio::test]
async fn test_list_tasks() {
    let router = test_router();
    for name in ["A", "B", "C"] {
        create_task(&router, name).await;
    }

    let (status, body) = send(&router, Method::GET, "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"result": [
            {"id": 1, "status": 0, "name": "A"},
            {"id": 2, "status": 0, "name": "B"},
            {"id": 3, "status": 0, "name": "C"},
        ]})
    );
}

#[tokio::test]
async fn test_list_tasks_empty() {
    let router = test_router();
    let (status, body) = send(&router, Method::GET, "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": []}));
}

#[tokio::test]
async fn test_update_task_ok() {
    let router = test_router();
    create_task(&router, "X").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/task/1",
        Some(json!({"id": 1, "name": "X", "status": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": {"id": 1, "status": 1, "name": "X"}}));

    let (_, listed) = send(&router, Method::GET, "/tasks", None).await;
    assert_eq!(listed["result"][0]["status"], 1);
}

#[tokio::test]
async fn test_update_task_status_no_change() {
    let router = test_router();
    create_task(&router, "TaskName1").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/task/1",
        Some(json!({"id": 1, "name": "TaskName1", "status": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"result": {"id": 1, "status": 0, "name": "TaskName1"}})
    );
}

#[tokio::test]
async fn test_update_task_name_mismatch() {
    let router = test_router();
    create_task(&router, "X").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/task/1",
        Some(json!({"id": 1, "name": "wrong", "status": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "ERR_TASK_0009");

    // Nothing changed.
    let (_, listed) = send(&router, Method::GET, "/tasks", None).await;
    assert_eq!(listed["result"][0]["name"], "X");
    assert_eq!(listed["result"][0]["status"], 0);
}

#[tokio::test]
async fn test_update_task_not_found() {
    let router = test_router();

    let (status, body) = send(
        &router,
        Method::PUT,
        "/task/5",
        Some(json!({"id": 5, "name": "TaskName1", "status": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorCode"], "ERR_TASK_0007");
}

#[tokio::test]
async fn test_update_task_path_body_id_mismatch() {
    let router = test_router();
    create_task(&router, "TaskName1").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/task/2",
        Some(json!({"id": 1, "name": "TaskName1", "status": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "ERR_TASK_0001");
}

#[tokio::test]
async fn test_update_task_invalid_path_id() {
    let router = test_router();
    create_task(&router, "TaskName1").await;

    for uri in ["/task/0", "/task/abc"] {
        let (status, body) = send(
            &router,
            Method::PUT,
            uri,
            Some(json!({"id": 1, "name": "TaskName1", "status": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorCode"], "ERR_TASK_0001");
    }
}

#[tokio::test]
async fn test_update_task_status_out_of_range() {
    let router = test_router();
    create_task(&router, "TaskName1").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        "/task/1",
        Some(json!({"id": 1, "name": "TaskName1", "status": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "ERR_TASK_0002");
}

#[tokio::test]
async fn test_delete_task_ok() {
    let router = test_router();
    for name in ["TaskName1", "TaskName2", "TaskName3"] {
        create_task(&router, name).await;
    }

    let (status, _) = send(&router, Method::DELETE, "/task/3", None).await;
    assert_eq!(status, StatusCode::OK);

    // Deleting again reports the task as gone.
    let (status, body) = send(&router, Method::DELETE, "/task/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorCode"], "ERR_TASK_0007");
}

#[tokio::test]
async fn test_delete_task_not_found() {
    let router = test_router();
    let (status, body) = send(&router, Method::DELETE, "/task/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorCode"], "ERR_TASK_0007");
}

#[tokio::test]
async fn test_delete_task_bad_param() {
    let router = test_router();
    let (status, body) = send(&router, Method::DELETE, "/task/0", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "ERR_TASK_0001");
}

#[tokio::test]
async fn test_ids_survive_deletion() {
    let router = test_router();
    create_task(&router, "first").await;
    send(&router, Method::DELETE, "/task/1", None).await;

    let (_, body) = create_task(&router, "second").await;
    assert_eq!(body["result"]["id"], 2);
}
