use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

// ============ Database Models ============

/// A single credit score observation.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CreditScore {
    /// Row identifier.
    pub id: i64,
    /// Score value.
    pub score: i32,
    /// Day the score was observed.
    pub score_date: NaiveDate,
}

/// Monthly aggregate over credit scores.
///
/// Not stored; derived by grouping `credit_scores` by calendar month.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar month in `YYYY-MM` form.
    pub month: String,
    /// Mean score across the month.
    pub avg_score: f64,
    /// Number of scores in the month.
    pub count: i64,
}

/// An event affecting a credit profile (inquiry, payment, default notice...).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct CreditEvent {
    pub id: i64,
    pub event_type: String,
    pub title: String,
    pub description: Option<String>,
    pub impact_score: Option<f64>,
    pub event_date: NaiveDate,
}

/// A dashboard alert.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    pub alert_type: String,
    pub severity: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

// ============ Request Models ============

/// Contact form body as received.
///
/// Fields stay untyped JSON so that missing, `null` and non-string values are
/// reported as validation issues instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub subject: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub message: Option<Value>,
}

/// `None` only when the key is absent; an explicit `null` becomes `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// ============ Market Data ============

/// Sample market ticker shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialTicker {
    pub symbol: &'static str,
    pub price: f64,
    pub change_percent: f64,
    pub sentiment_score: f64,
}

// ============ Response Models ============

/// Uniform JSON envelope returned by every API endpoint.
///
/// `data` is only ever present on success; `error` only on failure.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload, carrying a human-readable acknowledgement.
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}
