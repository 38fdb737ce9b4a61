use serde::{Deserialize, Serialize};

use crate::models::metrics::MetricSet;

/// Discrete rebalancing action for a single holding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Reduce,
    Hold,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Sell => write!(f, "SELL"),
            Action::Reduce => write!(f, "REDUCE"),
            Action::Hold => write!(f, "HOLD"),
        }
    }
}

/// Per-holding recommendation: the action, a short rationale, the rule
/// weight behind it, and the metrics it was judged on (presentation-rounded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub ticker: String,
    pub action: Action,
    pub reason: String,
    pub score: u8,
    pub metrics: MetricSet,
}

/// Portfolio-wide averages the holdings were benchmarked against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub average_return: f64,
    pub average_volatility: f64,
}

/// Full recommendation response: one entry per holding with usable history,
/// plus the benchmark summary. Computed fresh on every call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRecommendations {
    pub recommendations: Vec<Recommendation>,
    pub summary: PortfolioSummary,
}
