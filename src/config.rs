/// Tunable parameters for the analytics engine.
///
/// Defaults encode the standing policy: a 2% risk-free rate, 252 trading
/// days per year, and 30-year / 1000-path growth projections. Tests inject
/// smaller values (fewer paths, shorter horizons) through the same struct.
#[derive(Debug, Clone)]
pub struct EngineParams {
    /// Annual risk-free rate used in Sharpe ratio calculations.
    pub risk_free_rate: f64,
    /// Trading days per year; annualization factor for returns and volatility.
    pub trading_days_per_year: f64,
    /// Projection horizon in years for growth simulations.
    pub projection_years: usize,
    /// Number of independent simulated paths per projection.
    pub simulation_paths: usize,
    /// Minimum aligned price points required to produce recommendations.
    pub min_recommendation_points: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.02,
            trading_days_per_year: 252.0,
            projection_years: 30,
            simulation_paths: 1000,
            min_recommendation_points: 30,
        }
    }
}

impl EngineParams {
    /// Build params from the environment, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            risk_free_rate: env_or("RISK_FREE_RATE", defaults.risk_free_rate),
            trading_days_per_year: env_or("TRADING_DAYS_PER_YEAR", defaults.trading_days_per_year),
            projection_years: env_or("PROJECTION_YEARS", defaults.projection_years),
            simulation_paths: env_or("SIMULATION_PATHS", defaults.simulation_paths),
            min_recommendation_points: defaults.min_recommendation_points,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
