use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A dense price table over a shared trading calendar.
///
/// Dates are strictly ascending and every ticker column has exactly one
/// price per date; dates where any ticker had no known (or forward-filled)
/// price were dropped during alignment rather than zero-filled. The column
/// map is a `BTreeMap` so iteration over tickers is deterministic.
#[derive(Debug, Clone, Default)]
pub struct AlignedPriceMatrix {
    dates: Vec<NaiveDate>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl AlignedPriceMatrix {
    pub(crate) fn new(dates: Vec<NaiveDate>, columns: BTreeMap<String, Vec<f64>>) -> Self {
        debug_assert!(columns.values().all(|c| c.len() == dates.len()));
        Self { dates, columns }
    }

    /// Number of retained trading dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Price column for a ticker, aligned index-for-index with `dates()`.
    pub fn column(&self, ticker: &str) -> Option<&[f64]> {
        self.columns.get(ticker).map(Vec::as_slice)
    }
}
