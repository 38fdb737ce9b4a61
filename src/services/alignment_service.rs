use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, warn};

use crate::models::{AlignedPriceMatrix, PriceObservation};

/// Merge per-ticker price histories onto a single shared calendar.
///
/// The candidate calendar is the union of every input date. A ticker with no
/// observation on a given date inherits its most recent prior price
/// (forward-fill); dates where any ticker still has no value afterwards
/// (nothing observed on or before that date) are dropped entirely rather
/// than zero-filled. Output dates are ascending and every retained date has
/// a price for every ticker.
///
/// Each history must be sorted ascending by date with at most one row per
/// date. The result is independent of the input map's iteration order.
///
/// No tickers yields an empty matrix, as does any ticker with zero
/// observations.
pub fn align(histories: &HashMap<String, Vec<PriceObservation>>) -> AlignedPriceMatrix {
    if histories.is_empty() {
        return AlignedPriceMatrix::default();
    }
    for (ticker, points) in histories {
        if points.is_empty() {
            warn!("no price history for {}, alignment yields no dates", ticker);
            return AlignedPriceMatrix::default();
        }
    }

    let calendar: Vec<NaiveDate> = histories
        .values()
        .flat_map(|points| points.iter().map(|p| p.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // Forward-fill each ticker across the candidate calendar. BTreeMap keeps
    // downstream ticker iteration deterministic.
    let mut filled: BTreeMap<String, Vec<Option<f64>>> = BTreeMap::new();
    for (ticker, points) in histories {
        let mut column = Vec::with_capacity(calendar.len());
        let mut cursor = 0;
        let mut last: Option<f64> = None;
        for &date in &calendar {
            while cursor < points.len() && points[cursor].date <= date {
                last = Some(points[cursor].adjusted_close);
                cursor += 1;
            }
            column.push(last);
        }
        filled.insert(ticker.clone(), column);
    }

    // Retain only dates covered by every ticker.
    let complete: Vec<usize> = (0..calendar.len())
        .filter(|&i| filled.values().all(|column| column[i].is_some()))
        .collect();

    if complete.len() < calendar.len() {
        debug!(
            "alignment dropped {} of {} candidate dates lacking full coverage",
            calendar.len() - complete.len(),
            calendar.len()
        );
    }

    let dates: Vec<NaiveDate> = complete.iter().map(|&i| calendar[i]).collect();
    let columns: BTreeMap<String, Vec<f64>> = filled
        .into_iter()
        .map(|(ticker, column)| {
            let dense: Vec<f64> = complete.iter().filter_map(|&i| column[i]).collect();
            (ticker, dense)
        })
        .collect();

    AlignedPriceMatrix::new(dates, columns)
}
