use serde::{Deserialize, Serialize};

// Represents one position in a portfolio: how many units of a security are held.
// Tickers are unique within a portfolio; quantity is non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: String,
    pub quantity: f64,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, quantity: f64) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
        }
    }
}
