use tracing::debug;

use crate::models::metrics::round_to;
use crate::models::{PriceObservation, Quote};

/// Latest price and day-over-day percent change for one ticker's history.
///
/// Degrades instead of failing: an unknown or empty ticker quotes at 0 with
/// no change, a single observation quotes with change 0. Display prices use
/// the raw close rather than the adjusted series.
pub fn quote(ticker: &str, history: &[PriceObservation]) -> Quote {
    let Some(latest) = history.last() else {
        debug!("no observations for {}, quoting zero", ticker);
        return Quote {
            ticker: ticker.to_string(),
            price: 0.0,
            change_percent: 0.0,
        };
    };

    let change_percent = match history.len().checked_sub(2).map(|i| &history[i]) {
        Some(previous) if previous.close != 0.0 => {
            (latest.close - previous.close) / previous.close * 100.0
        }
        _ => 0.0,
    };

    Quote {
        ticker: ticker.to_string(),
        price: round_to(latest.close, 2),
        change_percent: round_to(change_percent, 2),
    }
}
