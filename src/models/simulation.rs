use serde::{Deserialize, Serialize};

/// Percentile bands of simulated portfolio value, indexed by year.
///
/// Each band has `horizon + 1` entries; index 0 is the deterministic current
/// value and is identical across all five bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjection {
    #[serde(rename = "10th")]
    pub p10: Vec<f64>,
    #[serde(rename = "25th")]
    pub p25: Vec<f64>,
    #[serde(rename = "50th")]
    pub p50: Vec<f64>,
    #[serde(rename = "75th")]
    pub p75: Vec<f64>,
    #[serde(rename = "90th")]
    pub p90: Vec<f64>,
}

impl GrowthProjection {
    /// Projection horizon in years (band length minus the year-0 entry).
    pub fn horizon_years(&self) -> usize {
        self.p50.len().saturating_sub(1)
    }
}
