//! Router assembly for the todo HTTP adapter.

use super::{AppState, handlers};
use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

/// Builds the todo router with request tracing attached.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/todos/{id}/complete", put(handlers::complete_todo))
        .route("/todos/{id}/archive", put(handlers::archive_todo))
        .route("/test-error", get(handlers::test_error))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
