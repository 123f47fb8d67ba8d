use chrono::{Duration, Utc};
use std::env;

use recip_api::db::Database;
use recip_api::db_storage::{PgReportStore, ReportStore, RECENT_EVENTS_LIMIT, RECENT_SCORES_LIMIT};

/// Smoke test for the Postgres report queries.
/// Marked ignored so it never runs against a shared database by accident; set TEST_DATABASE_URL to run.
#[tokio::test]
#[ignore]
async fn report_queries_smoke_test() -> anyhow::Result<()> {
    let db_url = env::var("TEST_DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("Set TEST_DATABASE_URL to run this test"))?;

    let db = Database::new(&db_url, 2).await?;
    db.migrate().await?;

    let today = Utc::now().date_naive();
    for days_ago in 0..15 {
        sqlx::query("INSERT INTO credit_scores (score, score_date) VALUES ($1, $2)")
            .bind(700 + days_ago as i32)
            .bind(today - Duration::days(days_ago))
            .execute(&db.pool)
            .await?;
    }
    sqlx::query("INSERT INTO credit_scores (score, score_date) VALUES (500, $1)")
        .bind(today - Duration::days(400))
        .execute(&db.pool)
        .await?;
    sqlx::query(
        "INSERT INTO alerts (alert_type, severity, message, is_read) VALUES ('score_drop', 'high', 'read', TRUE)",
    )
    .execute(&db.pool)
    .await?;

    let store = PgReportStore::new(db.pool.clone());

    let scores = store.recent_scores().await?;
    assert!(scores.len() as i64 <= RECENT_SCORES_LIMIT);
    assert!(scores.windows(2).all(|w| w[0].score_date >= w[1].score_date));

    let trends = store.score_trends().await?;
    assert!(trends.windows(2).all(|w| w[0].month <= w[1].month));
    let oldest_allowed = (today - Duration::days(186)).format("%Y-%m").to_string();
    assert!(trends.iter().all(|t| t.month >= oldest_allowed));

    let events = store.recent_events().await?;
    assert!(events.len() as i64 <= RECENT_EVENTS_LIMIT);

    let alerts = store.unread_alerts().await?;
    assert!(alerts.iter().all(|a| !a.is_read));

    Ok(())
}
