//! History request/response types and re-exports from `stockcast-types`.
// Consolidated re-exports so downstream crates can depend on `stockcast-core` only

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use stockcast_types::{
    Capability, ConnectorKey, ForecastModel, ForecastRequest, ForecastResult, HistoryReport,
    InsightsRequest, InsightsResult, Range, SYMBOL_REQUIRED, SeriesPoint, StockcastConfig,
    StockcastError, TrendLabel, require_symbol,
};

/// Way of reaching a provider's daily history.
///
/// A provider may expose several; the orchestrator tries them in the order the
/// provider advertises and stops at the first non-empty response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMethod {
    /// Bulk download addressed by a range token.
    Download,
    /// Per-ticker history addressed by explicit start/end timestamps.
    TickerHistory,
}

impl AccessMethod {
    /// Stable identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::TickerHistory => "ticker_history",
        }
    }
}

impl fmt::Display for AccessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single history call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Lookback window ending now.
    pub range: Range,
    /// Access method to use for this attempt.
    pub method: AccessMethod,
}

impl HistoryRequest {
    /// Build a request for `range` using `method`.
    #[must_use]
    pub const fn new(range: Range, method: AccessMethod) -> Self {
        Self { range, method }
    }
}

/// A raw closing-price cell exactly as delivered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RawValue {
    /// Numeric cell (may still be NaN or infinite).
    Number(f64),
    /// Textual cell, numeric or not.
    Text(String),
    /// Missing cell.
    #[default]
    Null,
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// One daily bar: exchange-local trading date and raw close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading date in the exchange's local calendar.
    pub date: NaiveDate,
    /// Raw closing price.
    pub close: RawValue,
}

impl Bar {
    /// Convenience constructor.
    pub fn new(date: NaiveDate, close: impl Into<RawValue>) -> Self {
        Self {
            date,
            close: close.into(),
        }
    }
}

/// Descriptive metadata reported alongside a history payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryMeta {
    /// Trading currency code, when reported.
    pub currency: Option<String>,
    /// IANA timezone of the listing exchange, when reported.
    pub exchange_timezone: Option<String>,
    /// Exchange offset from GMT in seconds, when reported.
    pub gmt_offset_seconds: Option<i32>,
}

/// Daily history returned by a provider for one access method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Bars in provider order; may be unsorted or contain unusable closes.
    pub bars: Vec<Bar>,
    /// Optional metadata.
    pub meta: Option<HistoryMeta>,
    /// Access method that produced this response.
    pub method: AccessMethod,
}

impl HistoryResponse {
    /// True when the provider returned no bars at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
