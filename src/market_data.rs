use crate::models::FinancialTicker;

/// Fixed sample tickers served by `/api/financial-data`.
///
/// Placeholder for a market data feed that has not been integrated yet.
pub static SAMPLE_TICKERS: [FinancialTicker; 3] = [
    FinancialTicker {
        symbol: "SPY",
        price: 445.32,
        change_percent: 1.2,
        sentiment_score: 0.65,
    },
    FinancialTicker {
        symbol: "QQQ",
        price: 378.91,
        change_percent: -0.8,
        sentiment_score: 0.45,
    },
    FinancialTicker {
        symbol: "IWM",
        price: 198.75,
        change_percent: 2.1,
        sentiment_score: 0.78,
    },
];

pub fn financial_snapshot() -> &'static [FinancialTicker] {
    &SAMPLE_TICKERS
}
