// Define data modules
mod config; // CLI flags / env (bind address, data file)
mod error; // AppError and its HTTP mapping
mod extract; // Lenient JSON body extractor
mod logic; // Pure collection operations
mod models; // Data structures (Todo, request bodies)
mod repository; // Serialized load -> mutate -> save over the store
mod routes_todos; // HTTP handlers for todo APIs
mod store; // Persistent storage (load/save the JSON file)

use std::sync::Arc;

use anyhow::Context;
use axum::{Router, routing::get};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::repository::{TodoRepository, UuidV4Ids};
use crate::routes_todos::AppState;
use crate::store::Store;

fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(routes_todos::list_todos)
                .post(routes_todos::create_todo)
                .fallback(routes_todos::not_found),
        )
        .route(
            "/todos/:id",
            get(routes_todos::get_todo)
                .put(routes_todos::update_todo)
                .delete(routes_todos::delete_todo)
                .fallback(routes_todos::not_found),
        )
        .fallback(routes_todos::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::parse();

    let repo = TodoRepository::new(Store::new(&config.data_file), Arc::new(UuidV4Ids));
    let state = AppState { todos: repo };

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(
        addr = %config.bind,
        data_file = %state.todos.store().path().display(),
        "server running"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}
