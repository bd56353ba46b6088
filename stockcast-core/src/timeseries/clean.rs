//! Turning raw provider bars into a [`PriceSeries`].

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::series::{PricePoint, PriceSeries};
use crate::types::{Bar, RawValue, StockcastError};

/// Message reported when no usable close survives cleaning.
pub const INVALID_DATA: &str = "Invalid data";

/// Coerce a raw close to a finite number.
///
/// Numbers pass when finite; text passes when it parses (after trimming) to a
/// finite `f64`. Everything else is dropped.
#[must_use]
pub fn coerce_close(v: &RawValue) -> Option<f64> {
    let x = match v {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        RawValue::Null => return None,
    };
    x.is_finite().then_some(x)
}

/// Extract the close column, drop unusable cells, and order by date.
///
/// When a date appears more than once, the last usable close delivered for
/// it wins.
///
/// # Errors
/// Returns `InvalidData("Invalid data")` when no usable close remains.
pub fn clean_closes(bars: &[Bar]) -> Result<PriceSeries, StockcastError> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for bar in bars {
        if let Some(close) = coerce_close(&bar.close) {
            by_date.insert(bar.date, close);
        }
    }
    if by_date.is_empty() {
        return Err(StockcastError::InvalidData(INVALID_DATA.to_string()));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        raw = bars.len(),
        kept = by_date.len(),
        "cleaned close column"
    );

    let points = by_date
        .into_iter()
        .map(|(date, close)| PricePoint::new(date, close))
        .collect();
    PriceSeries::from_points(points)
}
