pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quiz::handlers as quiz_handlers;
use crate::report::handlers as report_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz API
        .route("/api/v1/quiz/:bank", get(quiz_handlers::handle_get_bank))
        .route(
            "/api/v1/quiz/:bank/results",
            post(quiz_handlers::handle_export_results),
        )
        // Report API
        .route(
            "/api/v1/reports",
            post(report_handlers::handle_create_report),
        )
        .route(
            "/api/v1/reports/:id",
            get(report_handlers::handle_get_report).delete(report_handlers::handle_delete_report),
        )
        .with_state(state)
}
