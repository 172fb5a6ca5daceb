use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // Task endpoints
        .route("/tasks", get(handlers::task::list_tasks))
        .route("/task", post(handlers::task::create_task))
        .route(
            "/task/:task_id",
            put(handlers::task::update_task).delete(handlers::task::delete_task),
        )

        // Add state
        .with_state(state)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
