use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard_api::{config::AppConfig, routes, state::ApiState};
use taskboard_core::TaskUsecase;
use taskboard_store::InMemoryTaskRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Wire the layers leaf-first: store-backed repository, then use case.
    let repository = Arc::new(InMemoryTaskRepository::new());
    let tasks = Arc::new(TaskUsecase::new(repository));

    let state = ApiState { tasks };

    // Build router
    let app = routes::create_router(state);

    // Start server
    tracing::info!("Taskboard API listening on http://{}", config.server_address);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
