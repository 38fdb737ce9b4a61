use serde::{Deserialize, Serialize};

/// Annualized performance metrics derived from a daily value or price series.
///
/// Values are kept at full precision internally; `rounded()` produces the
/// presentation form (4 decimals for return/volatility, 2 for Sharpe).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricSet {
    pub annual_return: f64,
    pub annual_volatility: f64,
    pub sharpe_ratio: f64,
    /// Number of daily returns the estimates were computed from.
    pub observations: usize,
}

impl MetricSet {
    /// Presentation-boundary rounding. Never feed the result back into
    /// further computation.
    pub fn rounded(&self) -> Self {
        Self {
            annual_return: round_to(self.annual_return, 4),
            annual_volatility: round_to(self.annual_volatility, 4),
            sharpe_ratio: round_to(self.sharpe_ratio, 2),
            observations: self.observations,
        }
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
