use serde::{Deserialize, Serialize};

/// Latest price snapshot for a ticker: most recent close and the
/// day-over-day change in percent. Both rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub ticker: String,
    pub price: f64,
    pub change_percent: f64,
}
