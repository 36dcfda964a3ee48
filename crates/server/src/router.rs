//! Route table for the status service.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    // The admin and frontend apps are served from other origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::api_health));

    let workflow_routes = Router::new()
        .route(
            "/api/workflow/statuses",
            get(handlers::workflow::list_statuses),
        )
        .route(
            "/api/workflow/status/",
            get(handlers::workflow::get_empty_status),
        )
        .route(
            "/api/workflow/status/{code}",
            get(handlers::workflow::get_status),
        )
        .route(
            "/api/workflow/status/{code}/card",
            get(handlers::workflow::get_status_card),
        );

    Router::new()
        .merge(health_routes)
        .merge(workflow_routes)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
