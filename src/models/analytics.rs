use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in a portfolio value series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One holding's market value and share of the portfolio at the latest
/// aligned date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationPoint {
    pub ticker: String,
    pub value: f64,
    pub weight: f64,
}
