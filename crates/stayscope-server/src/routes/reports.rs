use std::time::Duration;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rdkafka::producer::FutureRecord;
use tracing::info;

use stayscope_core::models::report::Report;
use stayscope_core::models::request::ReportRequest;
use stayscope_storage::store::ReportStore;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_reports(State(state): State<AppState>) -> Result<Json<Vec<Report>>, ApiError> {
    Ok(Json(state.store.list_all().await?))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    match state.store.get(&id).await? {
        Some(report) => Ok(Json(report)),
        None => Err(ApiError::NotFound(format!("report not found: {id}"))),
    }
}

/// Accept a generation request and publish it to the report-request
/// topic. The pipeline picks it up asynchronously; 202 is all the
/// caller gets.
pub async fn request_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<StatusCode, ApiError> {
    let payload = serde_json::to_string(&request)?;

    let record = FutureRecord::<(), _>::to(&state.topic).payload(&payload);
    state
        .producer
        .send(record, Duration::from_secs(5))
        .await
        .map_err(|(e, _)| ApiError::Internal(format!("failed to publish request: {e}")))?;

    info!(location = ?request.location, "report requested");

    Ok(StatusCode::ACCEPTED)
}
