//! Configuration types shared across the orchestrator and connectors.

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StockcastError;

/// Lookback window for a history request, using the provider's range tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Range {
    /// One month.
    #[serde(rename = "1mo")]
    M1,
    /// Three months.
    #[serde(rename = "3mo")]
    M3,
    /// Six months.
    #[serde(rename = "6mo")]
    M6,
    /// One year.
    #[default]
    #[serde(rename = "1y")]
    Y1,
    /// Two years.
    #[serde(rename = "2y")]
    Y2,
    /// Five years.
    #[serde(rename = "5y")]
    Y5,
    /// Ten years.
    #[serde(rename = "10y")]
    Y10,
    /// Everything the provider has.
    #[serde(rename = "max")]
    Max,
}

impl Range {
    /// Provider token, e.g. `"5y"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
            Self::Y10 => "10y",
            Self::Max => "max",
        }
    }

    /// Length of the window in calendar months, `None` for [`Range::Max`].
    #[must_use]
    pub const fn months(self) -> Option<u32> {
        match self {
            Self::M1 => Some(1),
            Self::M3 => Some(3),
            Self::M6 => Some(6),
            Self::Y1 => Some(12),
            Self::Y2 => Some(24),
            Self::Y5 => Some(60),
            Self::Y10 => Some(120),
            Self::Max => None,
        }
    }

    /// First instant covered by the window when it ends at `end`.
    ///
    /// `Max` (and any underflow) starts at the UNIX epoch.
    #[must_use]
    pub fn start_from(self, end: DateTime<Utc>) -> DateTime<Utc> {
        self.months()
            .and_then(|m| end.checked_sub_months(Months::new(m)))
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Range {
    type Err = StockcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1mo" => Ok(Self::M1),
            "3mo" => Ok(Self::M3),
            "6mo" => Ok(Self::M6),
            "1y" => Ok(Self::Y1),
            "2y" => Ok(Self::Y2),
            "5y" => Ok(Self::Y5),
            "10y" => Ok(Self::Y10),
            "max" => Ok(Self::Max),
            other => Err(StockcastError::InvalidArg(format!(
                "unknown range '{other}' (expected one of 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, max)"
            ))),
        }
    }
}

/// Global configuration for the `Stockcast` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockcastConfig {
    /// History window used to fit forecast models.
    pub forecast_lookback: Range,
    /// History window used to compute insights.
    pub insights_lookback: Range,
    /// Forecast horizon used when a request does not name one.
    pub default_forecast_periods: usize,
    /// Largest accepted forecast horizon.
    pub max_forecast_periods: usize,
    /// Timeout for each individual provider attempt.
    pub provider_timeout: Duration,
}

impl Default for StockcastConfig {
    fn default() -> Self {
        Self {
            forecast_lookback: Range::Y5,
            insights_lookback: Range::Y1,
            default_forecast_periods: 180,
            max_forecast_periods: 3650,
            provider_timeout: Duration::from_secs(15),
        }
    }
}
