//! RECIP Credit Intelligence API Library
//!
//! Read-only reporting service over credit scores, credit events and alerts,
//! plus a validated contact form, a fixed market snapshot and the server-rendered
//! dashboard pages.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `contact`: Contact form validation and recording.
//! - `db`: Database connection and pool management.
//! - `db_storage`: Report queries behind the `ReportStore` trait.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `market_data`: Sample market tickers.
//! - `memory_store`: In-process `ReportStore`.
//! - `models`: Core data models and the response envelope.
//! - `shell`: Page layout and navigation.

pub mod config;
pub mod contact;
pub mod db;
pub mod db_storage;
pub mod errors;
pub mod handlers;
pub mod market_data;
pub mod memory_store;
pub mod models;
pub mod shell;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::handlers::AppState;

/// Largest accepted request body. The contact form is the only endpoint with a body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// API endpoints and page routes, without state or outer middleware.
///
/// The binary wraps these in rate limiting; `/health` is kept outside so health checks
/// are never throttled.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        // API endpoints
        .route("/api/scores", get(handlers::get_scores))
        .route("/api/trends", get(handlers::get_trends))
        .route("/api/events", get(handlers::get_events))
        .route("/api/alerts", get(handlers::get_alerts))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/financial-data", get(handlers::get_financial_data))
        // Pages
        .route("/", get(shell::home_page))
        .route("/about", get(shell::about_page))
        .route("/features", get(shell::features_page))
        .route("/dashboard", get(shell::dashboard_page))
        .route("/contact", get(shell::contact_page))
        .fallback(shell::not_found_page)
}

/// Final application: health check, the given routes, state and shared layers.
pub fn build_router(state: Arc<AppState>, routes: Router<Arc<AppState>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(routes)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
