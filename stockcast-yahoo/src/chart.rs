//! Wire shapes of the v8 chart endpoint and their conversion to history.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use stockcast_core::{AccessMethod, Bar, HistoryMeta, HistoryResponse, RawValue, StockcastError};

use crate::CONNECTOR_NAME;

/// Top-level chart envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartEnvelope {
    /// Payload or error.
    pub chart: Chart,
}

/// Chart body: one result per requested symbol, or an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Results; Yahoo returns at most one for a single-symbol request.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Error reported by the API.
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// Error object embedded in a chart response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartError {
    /// Short code such as `"Not Found"`.
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// A single symbol's chart payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    /// Listing metadata.
    #[serde(default)]
    pub meta: Option<ChartMeta>,
    /// Bar timestamps in UTC seconds; absent when the window is empty.
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    /// Price columns.
    #[serde(default)]
    pub indicators: Indicators,
}

/// Subset of chart metadata that is carried into [`HistoryMeta`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    /// Trading currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Ticker echoed back by the API.
    #[serde(default)]
    pub symbol: Option<String>,
    /// IANA timezone of the exchange.
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
    /// Exchange offset from GMT in seconds.
    #[serde(default)]
    pub gmtoffset: Option<i32>,
}

/// Price columns of a chart result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// OHLCV blocks; only the first is used.
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

/// OHLCV columns aligned with `timestamp`. Only closes are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteColumns {
    /// Raw close cells.
    #[serde(default)]
    pub close: Vec<RawValue>,
}

/// Convert a chart envelope into a [`HistoryResponse`].
///
/// An embedded `Not Found` error maps to `NotFound`; any other embedded error
/// to a connector error. A result without timestamps yields an empty response.
///
/// # Errors
/// Returns the mapped API error as described above.
pub fn into_history(
    env: ChartEnvelope,
    method: AccessMethod,
    what: &str,
) -> Result<HistoryResponse, StockcastError> {
    if let Some(err) = env.chart.error {
        return Err(if err.code.eq_ignore_ascii_case("not found") {
            StockcastError::not_found(what.to_string())
        } else {
            StockcastError::connector(
                CONNECTOR_NAME,
                format!("{}: {} ({what})", err.code, err.description),
            )
        });
    }

    let Some(result) = env.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(HistoryResponse {
            bars: Vec::new(),
            meta: None,
            method,
        });
    };

    let offset = result
        .meta
        .as_ref()
        .and_then(|m| m.gmtoffset)
        .map_or(0, i64::from);
    let mut closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default()
        .into_iter();

    let bars = result
        .timestamp
        .unwrap_or_default()
        .into_iter()
        .filter_map(|ts| {
            let close = closes.next().unwrap_or_default();
            let date = DateTime::from_timestamp(ts.checked_add(offset)?, 0)?.date_naive();
            Some(Bar { date, close })
        })
        .collect();

    let meta = result.meta.map(|m| HistoryMeta {
        currency: m.currency,
        exchange_timezone: m.exchange_timezone_name,
        gmt_offset_seconds: m.gmtoffset,
    });

    Ok(HistoryResponse { bars, meta, method })
}
