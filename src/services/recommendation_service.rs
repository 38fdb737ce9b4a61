use tracing::{info, warn};

use crate::config::EngineParams;
use crate::errors::EngineError;
use crate::models::metrics::round_to;
use crate::models::{
    Action, AlignedPriceMatrix, Holding, MetricSet, PortfolioRecommendations, PortfolioSummary,
    Recommendation,
};
use crate::services::{metrics_service, statistics};

/// Portfolio-wide metric averages each holding is benchmarked against.
struct Averages {
    annual_return: f64,
    annual_volatility: f64,
    sharpe_ratio: f64,
}

/// Rule-based rebalancing guidance for every holding with usable history.
///
/// Each holding's metrics come from its own aligned adjusted-close column
/// over the supplied matrix (trailing ~1 year), then get classified against
/// the arithmetic mean of all holdings' metrics. Holdings without a matrix
/// column are excluded rather than failing the portfolio.
///
/// Fails with `InsufficientData` when the matrix has fewer than
/// `params.min_recommendation_points` dates, or when no holding has usable
/// history.
pub fn recommend(
    matrix: &AlignedPriceMatrix,
    holdings: &[Holding],
    params: &EngineParams,
) -> Result<PortfolioRecommendations, EngineError> {
    if matrix.len() < params.min_recommendation_points {
        return Err(EngineError::InsufficientData {
            required: params.min_recommendation_points,
            actual: matrix.len(),
        });
    }

    let mut assessed: Vec<(&Holding, MetricSet)> = Vec::with_capacity(holdings.len());
    for holding in holdings {
        let Some(column) = matrix.column(&holding.ticker) else {
            warn!(
                "{} has no aligned price history, excluded from recommendations",
                holding.ticker
            );
            continue;
        };
        match metrics_service::compute_metrics(column, params) {
            Ok(metrics) => assessed.push((holding, metrics)),
            Err(err) => warn!("skipping {}: {}", holding.ticker, err),
        }
    }
    if assessed.is_empty() {
        return Err(EngineError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let returns: Vec<f64> = assessed.iter().map(|(_, m)| m.annual_return).collect();
    let volatilities: Vec<f64> = assessed.iter().map(|(_, m)| m.annual_volatility).collect();
    let sharpes: Vec<f64> = assessed.iter().map(|(_, m)| m.sharpe_ratio).collect();
    let averages = Averages {
        annual_return: statistics::mean(&returns),
        annual_volatility: statistics::mean(&volatilities),
        sharpe_ratio: statistics::mean(&sharpes),
    };

    let recommendations: Vec<Recommendation> = assessed
        .iter()
        .map(|(holding, metrics)| {
            let (action, reason, score) = classify(metrics, &averages);
            Recommendation {
                ticker: holding.ticker.clone(),
                action,
                reason: reason.to_string(),
                score,
                metrics: metrics.rounded(),
            }
        })
        .collect();

    info!(
        "recommended on {} of {} holdings over {} aligned dates",
        recommendations.len(),
        holdings.len(),
        matrix.len()
    );

    Ok(PortfolioRecommendations {
        recommendations,
        summary: PortfolioSummary {
            average_return: round_to(averages.annual_return, 4),
            average_volatility: round_to(averages.annual_volatility, 4),
        },
    })
}

/// The rule table. First matching rule wins; every comparison is strict.
fn classify(metrics: &MetricSet, averages: &Averages) -> (Action, &'static str, u8) {
    if metrics.annual_return < -0.10 {
        (Action::Sell, "severely underperforming, cut losses", 10)
    } else if metrics.annual_volatility > 1.5 * averages.annual_volatility {
        (Action::Reduce, "excess risk, trim position", 30)
    } else if metrics.sharpe_ratio > 1.2 * averages.sharpe_ratio && metrics.annual_return > 0.0 {
        (
            Action::Buy,
            "high-quality asset, sharpe well above portfolio average",
            90,
        )
    } else if metrics.annual_return > 1.2 * averages.annual_return
        && metrics.annual_volatility < averages.annual_volatility
    {
        (Action::Buy, "high return, low risk", 85)
    } else {
        (Action::Hold, "stable, maintain position", 50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceObservation;
    use crate::services::alignment_service;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn metrics(annual_return: f64, annual_volatility: f64, sharpe_ratio: f64) -> MetricSet {
        MetricSet {
            annual_return,
            annual_volatility,
            sharpe_ratio,
            observations: 251,
        }
    }

    fn averages(annual_return: f64, annual_volatility: f64, sharpe_ratio: f64) -> Averages {
        Averages {
            annual_return,
            annual_volatility,
            sharpe_ratio,
        }
    }

    #[test]
    fn test_deep_loss_sells_regardless_of_other_metrics() {
        // First rule wins even with an excellent sharpe and huge volatility
        let (action, _, score) = classify(&metrics(-0.15, 5.0, 9.0), &averages(0.1, 0.2, 0.5));
        assert_eq!(action, Action::Sell);
        assert_eq!(score, 10);
    }

    #[test]
    fn test_loss_boundary_is_strict() {
        // Exactly -0.10 does not trigger the sell rule
        let (action, _, _) = classify(&metrics(-0.10, 0.1, 0.0), &averages(0.0, 0.2, 0.0));
        assert_ne!(action, Action::Sell);
    }

    #[test]
    fn test_excess_volatility_reduces() {
        let (action, _, score) = classify(&metrics(0.05, 0.40, 0.3), &averages(0.05, 0.20, 0.3));
        assert_eq!(action, Action::Reduce);
        assert_eq!(score, 30);
    }

    #[test]
    fn test_volatility_boundary_is_strict() {
        // Exactly 1.5x the average volatility is not an excess
        let (action, _, _) = classify(&metrics(0.0, 0.30, 0.0), &averages(0.0, 0.20, 0.0));
        assert_eq!(action, Action::Hold);
    }

    #[test]
    fn test_superior_sharpe_buys() {
        let (action, reason, score) =
            classify(&metrics(0.12, 0.15, 1.0), &averages(0.10, 0.15, 0.5));
        assert_eq!(action, Action::Buy);
        assert_eq!(score, 90);
        assert!(reason.contains("sharpe"));
    }

    #[test]
    fn test_superior_sharpe_requires_positive_return() {
        // A great risk-adjusted score on a losing asset is not a buy
        let (action, _, _) = classify(&metrics(-0.05, 0.15, 1.0), &averages(0.10, 0.15, 0.5));
        assert_eq!(action, Action::Hold);
    }

    #[test]
    fn test_high_return_low_risk_buys() {
        // Sharpe below the 1.2x bar, but return beats it with below-average risk
        let (action, _, score) = classify(&metrics(0.30, 0.10, 0.55), &averages(0.20, 0.15, 0.5));
        assert_eq!(action, Action::Buy);
        assert_eq!(score, 85);
    }

    #[test]
    fn test_unremarkable_metrics_hold() {
        let (action, _, score) = classify(&metrics(0.08, 0.14, 0.45), &averages(0.10, 0.15, 0.5));
        assert_eq!(action, Action::Hold);
        assert_eq!(score, 50);
    }

    fn daily_matrix(series: &[(&str, Vec<f64>)]) -> AlignedPriceMatrix {
        let histories: HashMap<String, Vec<PriceObservation>> = series
            .iter()
            .map(|(ticker, prices)| {
                (
                    ticker.to_string(),
                    prices
                        .iter()
                        .enumerate()
                        .map(|(i, &p)| {
                            PriceObservation::new(
                                *ticker,
                                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                                    + chrono::Duration::days(i as i64),
                                p,
                                p,
                                1_000,
                            )
                        })
                        .collect(),
                )
            })
            .collect();
        alignment_service::align(&histories)
    }

    #[test]
    fn test_recommend_requires_enough_history() {
        let matrix = daily_matrix(&[("AAA", vec![100.0; 10])]);
        let holdings = vec![Holding::new("AAA", 1.0)];
        let result = recommend(&matrix, &holdings, &EngineParams::default());
        assert_eq!(
            result.unwrap_err(),
            EngineError::InsufficientData {
                required: 30,
                actual: 10
            }
        );
    }

    #[test]
    fn test_recommend_flat_and_collapsing_assets() {
        // DDD collapses (alternating -3% / -0.5% days); AAA is flat.
        let mut price = 100.0;
        let collapsing: Vec<f64> = (0..40)
            .map(|i| {
                let out = price;
                price *= if i % 2 == 0 { 0.97 } else { 0.995 };
                out
            })
            .collect();
        let matrix = daily_matrix(&[("AAA", vec![100.0; 40]), ("DDD", collapsing)]);
        let holdings = vec![Holding::new("AAA", 10.0), Holding::new("DDD", 5.0)];

        let result = recommend(&matrix, &holdings, &EngineParams::default()).unwrap();
        assert_eq!(result.recommendations.len(), 2);

        let by_ticker = |t: &str| {
            result
                .recommendations
                .iter()
                .find(|r| r.ticker == t)
                .unwrap()
        };

        // The sell rule fires first no matter how the averages look
        let ddd = by_ticker("DDD");
        assert_eq!(ddd.action, Action::Sell);
        assert_eq!(ddd.score, 10);

        // With the averages dragged deep below zero, the flat asset clears
        // the return threshold (0 > 1.2x a negative average) at
        // below-average volatility
        let aaa = by_ticker("AAA");
        assert_eq!(aaa.action, Action::Buy);
        assert_eq!(aaa.score, 85);

        // Summary averages the two holdings' annualized returns
        assert!(result.summary.average_return < 0.0);
    }

    #[test]
    fn test_recommend_excludes_unknown_tickers() {
        let matrix = daily_matrix(&[("AAA", vec![100.0; 40])]);
        let holdings = vec![Holding::new("AAA", 1.0), Holding::new("ZZZ", 50.0)];

        let result = recommend(&matrix, &holdings, &EngineParams::default()).unwrap();
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].ticker, "AAA");
    }

    #[test]
    fn test_recommend_no_usable_holdings() {
        let matrix = daily_matrix(&[("AAA", vec![100.0; 40])]);
        let holdings = vec![Holding::new("ZZZ", 50.0)];
        assert!(recommend(&matrix, &holdings, &EngineParams::default()).is_err());
    }

    #[test]
    fn test_recommend_rounds_presented_metrics() {
        let rising: Vec<f64> = (0..40).map(|i| 100.0 + i as f64 * 0.37).collect();
        let matrix = daily_matrix(&[("AAA", rising)]);
        let holdings = vec![Holding::new("AAA", 1.0)];

        let result = recommend(&matrix, &holdings, &EngineParams::default()).unwrap();
        let presented = &result.recommendations[0].metrics;
        // 4 decimal places on return/volatility, 2 on sharpe
        assert_eq!(
            presented.annual_return,
            round_to(presented.annual_return, 4)
        );
        assert_eq!(
            presented.annual_volatility,
            round_to(presented.annual_volatility, 4)
        );
        assert_eq!(presented.sharpe_ratio, round_to(presented.sharpe_ratio, 2));
    }
}
