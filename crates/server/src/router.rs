use crate::{handlers, state::AppState};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route(
            "/webhook",
            get(handlers::webhook_verify).post(handlers::handle_webhook),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
