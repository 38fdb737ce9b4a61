use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Represents one daily price row for a ticker, as supplied by the price store.
// At most one observation per (ticker, date); `adjusted_close` is the
// canonical price for all analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceObservation {
    pub ticker: String,
    pub date: NaiveDate,
    pub close: f64,
    pub adjusted_close: f64,
    pub volume: i64,
}

impl PriceObservation {
    pub fn new(
        ticker: impl Into<String>,
        date: NaiveDate,
        close: f64,
        adjusted_close: f64,
        volume: i64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            close,
            adjusted_close,
            volume,
        }
    }
}
