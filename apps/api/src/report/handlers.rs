//! Axum route handlers for the Report API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::report::accordion::{build_panels, AccordionPanel};
use crate::report::suggestion::CareerSuggestion;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateReportRequest {
    /// Exported quiz results (the `Qi:`/`Ai:` block).
    pub results: String,
    /// Suggestions to request; defaults to the configured target.
    pub target_count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CreateReportResponse {
    pub report_id: Uuid,
    pub target_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ReportStatusResponse {
    pub report_id: Uuid,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub suggestions: Vec<CareerSuggestion>,
    pub panels: Vec<AccordionPanel>,
    pub pending: usize,
    pub loading: bool,
    pub done: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/reports
///
/// Starts a report-generation session for one quiz submission and returns
/// its id. Generation continues in the background; poll the GET endpoint
/// for incremental results.
pub async fn handle_create_report(
    State(state): State<AppState>,
    Json(request): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<CreateReportResponse>), AppError> {
    if request.results.trim().is_empty() {
        return Err(AppError::Validation("results cannot be empty".to_string()));
    }
    let target_count = request
        .target_count
        .unwrap_or(state.config.suggestion_target);
    if target_count == 0 {
        return Err(AppError::Validation(
            "target_count must be at least 1".to_string(),
        ));
    }

    let report_id = state
        .sessions
        .spawn(
            state.assistant.clone(),
            state.config.assistant_id.clone(),
            request.results,
            target_count,
        )
        .await;

    Ok((
        StatusCode::ACCEPTED,
        Json(CreateReportResponse {
            report_id,
            target_count,
        }),
    ))
}

/// GET /api/v1/reports/:id
///
/// Latest snapshot of the session: suggestions resolved so far, the panel
/// view model, and how many slots are still pending.
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<ReportStatusResponse>, AppError> {
    let session = state
        .sessions
        .get(report_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Report {report_id} not found")))?;

    let snapshot = session.rx.borrow().clone();
    Ok(Json(ReportStatusResponse {
        report_id,
        started_at: session.started_at,
        panels: build_panels(&snapshot),
        pending: snapshot.pending(),
        loading: snapshot.loading,
        done: snapshot.done,
        suggestions: snapshot.suggestions,
    }))
}

/// DELETE /api/v1/reports/:id
///
/// Cancels in-flight generation and removes the session. The results screen
/// calls this on unmount so abandoned reports stop consuming the API.
pub async fn handle_delete_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.cancel_and_remove(report_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Report {report_id} not found")))
    }
}
