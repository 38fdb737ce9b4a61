//! Portfolio analytics engine: turns per-security daily price history and
//! per-portfolio holdings into an aligned valuation series, annualized
//! risk/return metrics, a probabilistic multi-year growth projection, and
//! per-holding rebalancing recommendations.
//!
//! Everything here is a pure function over in-memory inputs; fetching price
//! history and holdings is the caller's job, as is serving the results.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use config::EngineParams;
pub use errors::EngineError;
