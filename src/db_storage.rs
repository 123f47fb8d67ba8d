use crate::models::{Alert, CreditEvent, CreditScore, TrendPoint};
use async_trait::async_trait;
use sqlx::PgPool;

/// Most recent scores returned by `/api/scores`.
pub const RECENT_SCORES_LIMIT: i64 = 10;
/// Most recent events returned by `/api/events`.
pub const RECENT_EVENTS_LIMIT: i64 = 20;
/// Trailing window, in months, covered by `/api/trends`.
pub const TREND_WINDOW_MONTHS: u32 = 6;

/// Read-only access to the reporting tables.
///
/// Handlers receive an implementation through `AppState`; ordering and limits
/// are fixed by the implementation, never by the caller.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Latest [`RECENT_SCORES_LIMIT`] scores, newest `score_date` first.
    async fn recent_scores(&self) -> Result<Vec<CreditScore>, sqlx::Error>;

    /// Monthly averages over the last [`TREND_WINDOW_MONTHS`] months, oldest month first.
    async fn score_trends(&self) -> Result<Vec<TrendPoint>, sqlx::Error>;

    /// Latest [`RECENT_EVENTS_LIMIT`] events, newest `event_date` first.
    async fn recent_events(&self) -> Result<Vec<CreditEvent>, sqlx::Error>;

    /// Every alert with `is_read = false`, newest first.
    async fn unread_alerts(&self) -> Result<Vec<Alert>, sqlx::Error>;
}

/// Postgres-backed report queries.
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn recent_scores(&self) -> Result<Vec<CreditScore>, sqlx::Error> {
        sqlx::query_as::<_, CreditScore>(
            r#"
            SELECT id, score, score_date
            FROM credit_scores
            ORDER BY score_date DESC
            LIMIT $1
            "#,
        )
        .bind(RECENT_SCORES_LIMIT)
        .fetch_all(&self.pool)
        .await
    }

    async fn score_trends(&self) -> Result<Vec<TrendPoint>, sqlx::Error> {
        // Window in months is bound through make_interval
        sqlx::query_as::<_, TrendPoint>(
            r#"
            SELECT
                to_char(score_date, 'YYYY-MM') AS month,
                AVG(score)::float8 AS avg_score,
                COUNT(*) AS count
            FROM credit_scores
            WHERE score_date >= CURRENT_DATE - make_interval(months => $1)
            GROUP BY to_char(score_date, 'YYYY-MM')
            ORDER BY month ASC
            "#,
        )
        .bind(TREND_WINDOW_MONTHS as i32)
        .fetch_all(&self.pool)
        .await
    }

    async fn recent_events(&self) -> Result<Vec<CreditEvent>, sqlx::Error> {
        sqlx::query_as::<_, CreditEvent>(
            r#"
            SELECT id, event_type, title, description, impact_score, event_date
            FROM credit_events
            ORDER BY event_date DESC
            LIMIT $1
            "#,
        )
        .bind(RECENT_EVENTS_LIMIT)
        .fetch_all(&self.pool)
        .await
    }

    async fn unread_alerts(&self) -> Result<Vec<Alert>, sqlx::Error> {
        sqlx::query_as::<_, Alert>(
            r#"
            SELECT id, alert_type, severity, message, is_read, created_at
            FROM alerts
            WHERE is_read = FALSE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
