use tracing::debug;

use crate::models::{AlignedPriceMatrix, AllocationPoint, Holding, ValuePoint};

/// Total portfolio value per aligned date: Σ quantity × adjusted close.
///
/// Holdings without a column in the matrix contribute nothing (they lack
/// usable history) instead of failing the whole portfolio. An empty matrix
/// or empty holdings list yields an empty series, which callers must treat
/// as "no data" rather than a zero-value portfolio.
pub fn value_series(matrix: &AlignedPriceMatrix, holdings: &[Holding]) -> Vec<ValuePoint> {
    if matrix.is_empty() || holdings.is_empty() {
        return Vec::new();
    }

    let mut priced: Vec<(&Holding, &[f64])> = Vec::with_capacity(holdings.len());
    for holding in holdings {
        match matrix.column(&holding.ticker) {
            Some(column) => priced.push((holding, column)),
            None => debug!(
                "{} has no aligned price history, excluded from valuation",
                holding.ticker
            ),
        }
    }
    if priced.is_empty() {
        return Vec::new();
    }

    matrix
        .dates()
        .iter()
        .enumerate()
        .map(|(i, &date)| ValuePoint {
            date,
            value: priced
                .iter()
                .map(|(holding, column)| holding.quantity * column[i])
                .sum(),
        })
        .collect()
}

/// Per-holding market value and portfolio weight at the latest aligned date.
pub fn allocations(matrix: &AlignedPriceMatrix, holdings: &[Holding]) -> Vec<AllocationPoint> {
    if matrix.is_empty() || holdings.is_empty() {
        return Vec::new();
    }
    let last = matrix.len() - 1;

    let valued: Vec<(&Holding, f64)> = holdings
        .iter()
        .filter_map(|holding| {
            matrix
                .column(&holding.ticker)
                .map(|column| (holding, holding.quantity * column[last]))
        })
        .filter(|(_, value)| value.is_finite() && *value > 0.0)
        .collect();

    let total: f64 = valued.iter().map(|(_, value)| value).sum();

    valued
        .into_iter()
        .map(|(holding, value)| AllocationPoint {
            ticker: holding.ticker.clone(),
            value,
            weight: if total > 0.0 { value / total } else { 0.0 },
        })
        .collect()
}
