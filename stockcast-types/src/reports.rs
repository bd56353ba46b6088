//! Report envelopes produced by the orchestrator and returned to clients.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Range;

/// Forecast output: one predicted close per future calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Future dates formatted `YYYY-MM-DD`, strictly increasing.
    pub months: Vec<String>,
    /// Predicted closes rounded to 2 decimals, aligned with `months`.
    pub prices: Vec<f64>,
    /// Human-readable model name.
    pub model: String,
}

impl ForecastResult {
    /// Number of forecast periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// True when no periods were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Coarse trend classification derived from the annualized return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendLabel {
    /// Annualized return above 10%.
    #[serde(rename = "Strong Uptrend")]
    StrongUptrend,
    /// Annualized return above -5% and at most 10%.
    #[serde(rename = "Sideways")]
    Sideways,
    /// Annualized return at or below -5%.
    #[serde(rename = "Downtrend")]
    Downtrend,
}

impl TrendLabel {
    /// Classify an annualized return expressed in percent.
    #[must_use]
    pub fn classify(annual_return_pct: f64) -> Self {
        if annual_return_pct > 10.0 {
            Self::StrongUptrend
        } else if annual_return_pct > -5.0 {
            Self::Sideways
        } else {
            Self::Downtrend
        }
    }

    /// Display string used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrongUptrend => "Strong Uptrend",
            Self::Sideways => "Sideways",
            Self::Downtrend => "Downtrend",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annualized risk/return statistics for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResult {
    /// Mean daily return × 252, in percent.
    pub annual_return: f64,
    /// Sample standard deviation of daily returns × √252, in percent.
    pub annual_volatility: f64,
    /// Volatility / 2 clamped to `[1, 100]`.
    pub risk_score: f64,
    /// Trend classification.
    pub label: TrendLabel,
}

/// One point of a cleaned close series as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Trading date, `YYYY-MM-DD`.
    pub time: String,
    /// Closing price.
    pub close: f64,
}

/// Cleaned close history for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryReport {
    /// Requested symbol.
    pub symbol: String,
    /// Lookback that was fetched.
    pub range: Range,
    /// Points in ascending date order.
    pub series: Vec<SeriesPoint>,
}
