//! Small numeric helpers shared by the analytics services.

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator), used uniformly for both
/// portfolio-level and per-holding estimates so the two are comparable.
/// Defined as 0.0 when fewer than two values exist.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() as f64 - 1.0);
    variance.sqrt()
}

/// Day-over-day simple returns: v[i]/v[i-1] − 1.
///
/// Pairs whose previous value is not positive are skipped, so a degenerate
/// series can produce fewer than len − 1 returns (or none at all).
pub fn simple_returns(values: &[f64]) -> Vec<f64> {
    let mut returns = Vec::with_capacity(values.len().saturating_sub(1));
    for i in 1..values.len() {
        let prev = values[i - 1];
        if prev > 0.0 {
            returns.push(values[i] / prev - 1.0);
        }
    }
    returns
}

/// Linear-interpolation percentile over an ascending-sorted slice.
///
/// `pct` is in [0, 100]. The rank `pct/100 × (n − 1)` is interpolated
/// between its two neighbors, matching the conventional statistical
/// percentile rather than nearest-rank. Returns 0.0 for an empty slice.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
    }
}
