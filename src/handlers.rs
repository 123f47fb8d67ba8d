use crate::contact::{validate_contact, ContactRecorder, CONTACT_ACKNOWLEDGEMENT};
use crate::db_storage::ReportStore;
use crate::errors::{AppError, ResultExt};
use crate::market_data::financial_snapshot;
use crate::models::*;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only report queries.
    pub store: Arc<dyn ReportStore>,
    /// Destination for accepted contact submissions.
    pub contacts: Arc<dyn ContactRecorder>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReportStore>, contacts: Arc<dyn ContactRecorder>) -> Self {
        Self { store, contacts }
    }
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "recip-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /api/scores
///
/// Latest ten credit scores, newest first.
pub async fn get_scores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CreditScore>>>, AppError> {
    let scores = state
        .store
        .recent_scores()
        .await
        .context("Failed to fetch scores")?;

    tracing::debug!("GET /api/scores - {} rows", scores.len());
    Ok(Json(ApiResponse::ok(scores)))
}

/// GET /api/trends
///
/// Monthly score averages over the last six months, oldest month first.
pub async fn get_trends(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<TrendPoint>>>, AppError> {
    let trends = state
        .store
        .score_trends()
        .await
        .context("Failed to fetch trends")?;

    tracing::debug!("GET /api/trends - {} months", trends.len());
    Ok(Json(ApiResponse::ok(trends)))
}

/// GET /api/events
///
/// Latest twenty credit events, newest first.
pub async fn get_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CreditEvent>>>, AppError> {
    let events = state
        .store
        .recent_events()
        .await
        .context("Failed to fetch events")?;

    tracing::debug!("GET /api/events - {} rows", events.len());
    Ok(Json(ApiResponse::ok(events)))
}

/// GET /api/alerts
///
/// All unread alerts, newest first.
pub async fn get_alerts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Alert>>>, AppError> {
    let alerts = state
        .store
        .unread_alerts()
        .await
        .context("Failed to fetch alerts")?;

    tracing::debug!("GET /api/alerts - {} unread", alerts.len());
    Ok(Json(ApiResponse::ok(alerts)))
}

/// POST /api/contact
///
/// Validates the form and hands it to the contact recorder. Invalid bodies are
/// rejected before the recorder sees them.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let Json(form) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let submission = validate_contact(form)?;
    state.contacts.record(&submission);

    Ok(Json(ApiResponse::<()>::acknowledged(CONTACT_ACKNOWLEDGEMENT)))
}

/// GET /api/financial-data
///
/// Fixed sample market tickers.
pub async fn get_financial_data() -> Json<ApiResponse<&'static [FinancialTicker]>> {
    Json(ApiResponse::ok(financial_snapshot()))
}
