//! In-process [`ReportStore`] over plain vectors.
//!
//! Applies the same ordering, limits and trend window as the Postgres queries.
//! Used to exercise the HTTP layer without a database.

use crate::db_storage::{ReportStore, RECENT_EVENTS_LIMIT, RECENT_SCORES_LIMIT, TREND_WINDOW_MONTHS};
use crate::models::{Alert, CreditEvent, CreditScore, TrendPoint};
use async_trait::async_trait;
use chrono::{Months, NaiveDate, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryReportStore {
    pub scores: Vec<CreditScore>,
    pub events: Vec<CreditEvent>,
    pub alerts: Vec<Alert>,
    /// Fixed "today" for the trend window; defaults to the current UTC date.
    pub today: Option<NaiveDate>,
    /// When set, every query fails as if the connection dropped.
    pub unavailable: bool,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every query fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.unavailable {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

/// Groups scores observed since `today - TREND_WINDOW_MONTHS` by calendar month.
///
/// Mirrors the SQL aggregation: months ascending, average and count per month.
pub fn aggregate_trends(scores: &[CreditScore], today: NaiveDate) -> Vec<TrendPoint> {
    let cutoff = today
        .checked_sub_months(Months::new(TREND_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MIN);

    let mut months: BTreeMap<String, (i64, i64)> = BTreeMap::new();
    for score in scores.iter().filter(|s| s.score_date >= cutoff) {
        let entry = months
            .entry(score.score_date.format("%Y-%m").to_string())
            .or_insert((0, 0));
        entry.0 += i64::from(score.score);
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|(month, (sum, count))| TrendPoint {
            month,
            avg_score: sum as f64 / count as f64,
            count,
        })
        .collect()
}

fn newest_first<T, K: Ord>(rows: &[T], key: impl Fn(&T) -> K, limit: Option<i64>) -> Vec<T>
where
    T: Clone,
{
    let mut rows = rows.to_vec();
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    if let Some(limit) = limit {
        rows.truncate(usize::try_from(limit).unwrap_or(0));
    }
    rows
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn recent_scores(&self) -> Result<Vec<CreditScore>, sqlx::Error> {
        self.check_available()?;
        Ok(newest_first(
            &self.scores,
            |s| s.score_date,
            Some(RECENT_SCORES_LIMIT),
        ))
    }

    async fn score_trends(&self) -> Result<Vec<TrendPoint>, sqlx::Error> {
        self.check_available()?;
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
        Ok(aggregate_trends(&self.scores, today))
    }

    async fn recent_events(&self) -> Result<Vec<CreditEvent>, sqlx::Error> {
        self.check_available()?;
        Ok(newest_first(
            &self.events,
            |e| e.event_date,
            Some(RECENT_EVENTS_LIMIT),
        ))
    }

    async fn unread_alerts(&self) -> Result<Vec<Alert>, sqlx::Error> {
        self.check_available()?;
        let unread: Vec<Alert> = self.alerts.iter().filter(|a| !a.is_read).cloned().collect();
        Ok(newest_first(&unread, |a| a.created_at, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(id: i64, value: i32, date: &str) -> CreditScore {
        CreditScore {
            id,
            score: value,
            score_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_trends_group_by_month_ascending() {
        let scores = vec![
            score(1, 700, "2024-06-03"),
            score(2, 720, "2024-05-20"),
            score(3, 740, "2024-06-28"),
            score(4, 680, "2024-05-01"),
        ];

        let trends = aggregate_trends(&scores, day("2024-06-30"));

        assert_eq!(
            trends,
            vec![
                TrendPoint {
                    month: "2024-05".into(),
                    avg_score: 700.0,
                    count: 2
                },
                TrendPoint {
                    month: "2024-06".into(),
                    avg_score: 720.0,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_trends_cutoff_is_day_precise() {
        // today - 6 months = 2024-01-15; the 14th falls outside, the 15th inside
        let scores = vec![
            score(1, 600, "2024-01-14"),
            score(2, 650, "2024-01-15"),
            score(3, 800, "2023-12-31"),
        ];

        let trends = aggregate_trends(&scores, day("2024-07-15"));

        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].month, "2024-01");
        assert_eq!(trends[0].count, 1);
        assert_eq!(trends[0].avg_score, 650.0);
    }

    #[test]
    fn test_trends_empty_without_scores() {
        assert!(aggregate_trends(&[], day("2024-07-15")).is_empty());
    }

    #[tokio::test]
    async fn test_recent_scores_truncates_to_limit() {
        let store = MemoryReportStore {
            scores: (1..=15)
                .map(|i| score(i, 600 + i as i32, &format!("2024-03-{:02}", i)))
                .collect(),
            ..MemoryReportStore::new()
        };

        let scores = store.recent_scores().await.unwrap();

        assert_eq!(scores.len(), RECENT_SCORES_LIMIT as usize);
        assert_eq!(scores[0].score_date, day("2024-03-15"));
        assert_eq!(scores[9].score_date, day("2024-03-06"));
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_query() {
        let store = MemoryReportStore::unavailable();
        assert!(store.recent_scores().await.is_err());
        assert!(store.score_trends().await.is_err());
        assert!(store.recent_events().await.is_err());
        assert!(store.unread_alerts().await.is_err());
    }
}
