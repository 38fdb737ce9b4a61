mod analytics;
pub mod metrics;
mod portfolio;
mod price_matrix;
mod price_point;
mod quote;
mod recommendation;
mod simulation;

pub use analytics::{AllocationPoint, ValuePoint};
pub use metrics::MetricSet;
pub use portfolio::Holding;
pub use price_matrix::AlignedPriceMatrix;
pub use price_point::PriceObservation;
pub use quote::Quote;
pub use recommendation::{Action, PortfolioRecommendations, PortfolioSummary, Recommendation};
pub use simulation::GrowthProjection;
