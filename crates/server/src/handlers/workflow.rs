//! Workflow status endpoints.
//!
//! Read-only views over the status registry. Unknown codes are answered with
//! the `PENDING_REVIEW` card and `fallback: true`, never with an error.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use press_workflow::{lookup, render, StatusCard, StatusDisplayMetadata, WorkflowStatus};
use serde::Serialize;

use crate::error::AppResult;
use crate::result_ext::ResultExt;
use crate::state::AppState;

/// One row of the status listing.
#[derive(Debug, Serialize)]
pub struct StatusEntry {
    pub code: WorkflowStatus,
    #[serde(flatten)]
    pub metadata: &'static StatusDisplayMetadata,
}

/// Status card for a requested code.
#[derive(Debug, Serialize)]
pub struct StatusCardResponse {
    /// Code as sent by the client
    pub requested: String,

    /// Status the card was rendered for
    pub status: WorkflowStatus,

    /// True when `requested` was not a known code
    pub fallback: bool,

    pub card: StatusCard,
}

/// Resolve a raw code, logging when the default is substituted.
fn resolve(code: &str) -> (WorkflowStatus, bool) {
    match code.parse::<WorkflowStatus>() {
        Ok(status) => (status, false),
        Err(e) => {
            tracing::debug!(error = %e, fallback = %WorkflowStatus::DEFAULT, "Using default workflow status");
            (WorkflowStatus::DEFAULT, true)
        }
    }
}

/// List every status with its display metadata.
///
/// `GET /api/workflow/statuses`
pub async fn list_statuses() -> Json<Vec<StatusEntry>> {
    let entries = WorkflowStatus::ALL
        .into_iter()
        .map(|code| StatusEntry {
            code,
            metadata: lookup(code),
        })
        .collect();

    Json(entries)
}

fn status_response(code: String) -> Json<StatusCardResponse> {
    let (status, fallback) = resolve(&code);

    Json(StatusCardResponse {
        requested: code,
        status,
        fallback,
        card: render(status),
    })
}

/// Render the status card for a code.
///
/// `GET /api/workflow/status/{code}`
pub async fn get_status(Path(code): Path<String>) -> Json<StatusCardResponse> {
    status_response(code)
}

/// Render the status card for an empty code (the default card).
///
/// `GET /api/workflow/status/`
pub async fn get_empty_status() -> Json<StatusCardResponse> {
    status_response(String::new())
}

/// Render the status card for a code as an HTML fragment.
///
/// `GET /api/workflow/status/{code}/card`
pub async fn get_status_card(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Html<String>> {
    let (status, _) = resolve(&code);

    let html = state
        .markup
        .render(&render(status))
        .log(format!("rendering status card for {}", status))?;

    Ok(Html(html))
}
