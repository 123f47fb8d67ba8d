//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, NaiveDate, Utc};
use recip_api::contact::ContactRecorder;
use recip_api::handlers::AppState;
use recip_api::memory_store::MemoryReportStore;
use recip_api::models::{Alert, ContactSubmission, CreditEvent, CreditScore};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Keeps every accepted submission so tests can assert on side effects.
#[derive(Default)]
pub struct CapturingRecorder {
    pub submissions: Mutex<Vec<ContactSubmission>>,
}

impl CapturingRecorder {
    pub fn recorded(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

impl ContactRecorder for CapturingRecorder {
    fn record(&self, submission: &ContactSubmission) {
        self.submissions.lock().unwrap().push(submission.clone());
    }
}

pub fn app_with(store: MemoryReportStore) -> (Router, Arc<CapturingRecorder>) {
    let recorder = Arc::new(CapturingRecorder::default());
    let state = Arc::new(AppState::new(Arc::new(store), recorder.clone()));
    (recip_api::build_router(state, recip_api::routes()), recorder)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn day(date: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
}

pub fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

pub fn score(id: i64, value: i32, date: &str) -> CreditScore {
    CreditScore {
        id,
        score: value,
        score_date: day(date),
    }
}

pub fn event(id: i64, date: &str) -> CreditEvent {
    CreditEvent {
        id,
        event_type: "inquiry".to_string(),
        title: format!("Hard inquiry #{}", id),
        description: None,
        impact_score: Some(-5.0),
        event_date: day(date),
    }
}

pub fn alert(id: i64, is_read: bool, created_at: &str) -> Alert {
    Alert {
        id,
        alert_type: "score_drop".to_string(),
        severity: "high".to_string(),
        message: format!("Alert {}", id),
        is_read,
        created_at: timestamp(created_at),
    }
}
