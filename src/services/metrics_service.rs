use tracing::warn;

use crate::config::EngineParams;
use crate::errors::EngineError;
use crate::models::MetricSet;
use crate::services::statistics;

/// Minimum number of values needed before day-over-day returns exist.
pub const MIN_RETURN_POINTS: usize = 2;

/// Day-over-day simple returns for a value or price series.
///
/// Fails with `InsufficientData` below two points, or when no usable return
/// pair remains after skipping non-positive denominators.
pub fn daily_returns(values: &[f64]) -> Result<Vec<f64>, EngineError> {
    if values.len() < MIN_RETURN_POINTS {
        return Err(EngineError::InsufficientData {
            required: MIN_RETURN_POINTS,
            actual: values.len(),
        });
    }

    let returns = statistics::simple_returns(values);
    if returns.is_empty() {
        warn!("series of {} values produced no usable returns", values.len());
        return Err(EngineError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(returns)
}

/// Annualized return, volatility and Sharpe ratio for a value series.
///
/// Volatility uses the sample standard deviation; a single-return series has
/// volatility 0. The Sharpe ratio is clamped to 0 when volatility is exactly
/// 0 rather than dividing by zero. Results are unrounded; call
/// `MetricSet::rounded()` at the presentation boundary.
pub fn compute_metrics(values: &[f64], params: &EngineParams) -> Result<MetricSet, EngineError> {
    let returns = daily_returns(values)?;

    let annual_return = statistics::mean(&returns) * params.trading_days_per_year;
    let annual_volatility =
        statistics::sample_std_dev(&returns) * params.trading_days_per_year.sqrt();
    let sharpe_ratio = if annual_volatility == 0.0 {
        0.0
    } else {
        (annual_return - params.risk_free_rate) / annual_volatility
    };

    Ok(MetricSet {
        annual_return,
        annual_volatility,
        sharpe_ratio,
        observations: returns.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_too_few_values_is_insufficient() {
        let params = EngineParams::default();
        assert_eq!(
            compute_metrics(&[100.0], &params).unwrap_err(),
            EngineError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
        assert_eq!(
            compute_metrics(&[], &params).unwrap_err(),
            EngineError::InsufficientData {
                required: 2,
                actual: 0
            }
        );
    }

    #[test]
    fn test_constant_series_clamps_sharpe() {
        let params = EngineParams::default();
        let metrics = compute_metrics(&[100.0, 100.0, 100.0], &params).unwrap();

        assert_eq!(metrics.annual_return, 0.0);
        assert_eq!(metrics.annual_volatility, 0.0);
        // Zero volatility clamps Sharpe to 0 instead of dividing by zero
        assert_eq!(metrics.sharpe_ratio, 0.0);
        assert_eq!(metrics.observations, 2);
    }

    #[test]
    fn test_two_point_series_has_zero_spread() {
        let params = EngineParams::default();
        let metrics = compute_metrics(&[100.0, 110.0], &params).unwrap();

        assert_relative_eq!(metrics.annual_return, 0.10 * 252.0, epsilon = 1e-9);
        // One return carries no spread estimate
        assert_eq!(metrics.annual_volatility, 0.0);
        assert_eq!(metrics.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_known_series() {
        let params = EngineParams::default();
        // Returns: +10%, -10%
        let metrics = compute_metrics(&[100.0, 110.0, 99.0], &params).unwrap();

        let mean_daily = (0.10 - 0.10) / 2.0;
        assert_relative_eq!(metrics.annual_return, mean_daily * 252.0, epsilon = 1e-9);

        // Sample std-dev of {0.1, -0.1} is 0.1 * sqrt(2)
        let expected_vol = 0.1 * 2.0f64.sqrt() * 252.0f64.sqrt();
        assert_relative_eq!(metrics.annual_volatility, expected_vol, epsilon = 1e-9);

        let expected_sharpe = (metrics.annual_return - 0.02) / expected_vol;
        assert_relative_eq!(metrics.sharpe_ratio, expected_sharpe, epsilon = 1e-9);
    }

    #[test]
    fn test_all_non_positive_values_is_insufficient() {
        let params = EngineParams::default();
        assert!(compute_metrics(&[0.0, 0.0, 0.0], &params).is_err());
    }

    #[test]
    fn test_risk_free_rate_shifts_sharpe_only() {
        let values = [100.0, 101.0, 103.0, 102.0, 104.0];
        let base = EngineParams::default();
        let zero_rf = EngineParams {
            risk_free_rate: 0.0,
            ..EngineParams::default()
        };

        let with_rf = compute_metrics(&values, &base).unwrap();
        let without_rf = compute_metrics(&values, &zero_rf).unwrap();

        assert_eq!(with_rf.annual_return, without_rf.annual_return);
        assert_eq!(with_rf.annual_volatility, without_rf.annual_volatility);
        assert!(with_rf.sharpe_ratio < without_rf.sharpe_ratio);
    }
}
