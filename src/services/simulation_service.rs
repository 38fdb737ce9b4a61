use rand::Rng;
use rand_distr::StandardNormal;
use tracing::info;

use crate::config::EngineParams;
use crate::errors::EngineError;
use crate::models::{GrowthProjection, ValuePoint};
use crate::services::{metrics_service, statistics};

/// Project portfolio growth with a geometric-Brownian-motion fit over the
/// trailing value history, using the thread-local RNG.
///
/// The input should cover roughly the last trading year; the last entry is
/// the current value every path starts from.
pub fn project_growth(
    series: &[ValuePoint],
    params: &EngineParams,
) -> Result<GrowthProjection, EngineError> {
    project_growth_with(series, params, &mut rand::rng())
}

/// Same as [`project_growth`] with an injectable random source, so tests can
/// seed a generator and assert statistical properties without flakiness.
///
/// Drift and volatility are annualized from the series' daily returns
/// (sample estimator, matching the metrics service). Each of
/// `params.simulation_paths` paths starts at the current value and advances
/// one year at a time for `params.projection_years` years:
///
///   v[t] = v[t-1] · exp((μ − σ²/2) + σ·Z),  Z ~ N(0, 1)
///
/// Draws are independent across years and paths. The result is the
/// 10/25/50/75/90th linear-interpolation percentile of value per year; year
/// 0 is the deterministic current value in every band.
pub fn project_growth_with<R: Rng + ?Sized>(
    series: &[ValuePoint],
    params: &EngineParams,
    rng: &mut R,
) -> Result<GrowthProjection, EngineError> {
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let returns = metrics_service::daily_returns(&values)?;
    let current = match values.last() {
        Some(&v) => v,
        None => {
            return Err(EngineError::InsufficientData {
                required: metrics_service::MIN_RETURN_POINTS,
                actual: 0,
            })
        }
    };

    let mu = statistics::mean(&returns) * params.trading_days_per_year;
    let sigma = statistics::sample_std_dev(&returns) * params.trading_days_per_year.sqrt();
    let drift = mu - 0.5 * sigma * sigma;

    info!(
        "projecting {} paths over {} years (mu={:.4}, sigma={:.4})",
        params.simulation_paths, params.projection_years, mu, sigma
    );

    // Value of every path at every year; per_year[0] is the current value.
    let mut per_year: Vec<Vec<f64>> = (0..=params.projection_years)
        .map(|_| Vec::with_capacity(params.simulation_paths))
        .collect();

    for _ in 0..params.simulation_paths {
        let mut value = current;
        per_year[0].push(value);
        for year in 1..=params.projection_years {
            let z: f64 = rng.sample(StandardNormal);
            value *= (drift + sigma * z).exp();
            per_year[year].push(value);
        }
    }

    let mut bands = GrowthProjection {
        p10: Vec::with_capacity(params.projection_years + 1),
        p25: Vec::with_capacity(params.projection_years + 1),
        p50: Vec::with_capacity(params.projection_years + 1),
        p75: Vec::with_capacity(params.projection_years + 1),
        p90: Vec::with_capacity(params.projection_years + 1),
    };
    for year_values in &mut per_year {
        year_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        bands.p10.push(statistics::percentile(year_values, 10.0));
        bands.p25.push(statistics::percentile(year_values, 25.0));
        bands.p50.push(statistics::percentile(year_values, 50.0));
        bands.p75.push(statistics::percentile(year_values, 75.0));
        bands.p90.push(statistics::percentile(year_values, 90.0));
    }

    Ok(bands)
}
