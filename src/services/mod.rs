pub mod alignment_service;
pub mod metrics_service;
pub mod quote_service;
pub mod recommendation_service;
pub mod simulation_service;
pub mod statistics;
pub mod valuation_service;
