use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{SeriesPoint, StockcastError};

/// A single cleaned observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: NaiveDate,
    /// Finite closing price.
    pub close: f64,
}

impl PricePoint {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Date-ordered close series.
///
/// Invariants: dates strictly increase and every close is finite. The only
/// way to build one is [`PriceSeries::from_points`], which checks both.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap points that are already sorted.
    ///
    /// # Errors
    /// Returns `InvalidData` if a close is not finite or dates do not strictly increase.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self, StockcastError> {
        if let Some(p) = points.iter().find(|p| !p.close.is_finite()) {
            return Err(StockcastError::InvalidData(format!(
                "non-finite close on {}",
                p.date
            )));
        }
        if let Some(w) = points.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(StockcastError::InvalidData(format!(
                "dates out of order: {} then {}",
                w[0].date, w[1].date
            )));
        }
        Ok(Self { points })
    }

    /// All points in ascending date order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }

    /// First observation.
    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Most recent observation.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Wire representation used by the history report.
    #[must_use]
    pub fn to_series_points(&self) -> Vec<SeriesPoint> {
        self.points
            .iter()
            .map(|p| SeriesPoint {
                time: p.date.format("%Y-%m-%d").to_string(),
                close: p.close,
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for PriceSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            points: Vec<PricePoint>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::from_points(raw.points).map_err(serde::de::Error::custom)
    }
}
