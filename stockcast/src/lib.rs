//! stockcast
//!
//! Price forecasting and risk/return insights over pluggable market-data
//! connectors.
//!
//! Overview
//! - Register one or more connectors implementing `StockConnector` from
//!   `stockcast-core` (for example `stockcast-yahoo` or `stockcast-mock`).
//! - Every operation runs the same straight line: fetch daily history, clean
//!   the close column, compute, return a typed result.
//! - History acquisition walks each connector's advertised access methods in
//!   order and stops at the first non-empty answer. Each attempt is bounded by
//!   the configured provider timeout; when every attempt is empty or failed the
//!   call returns `DataUnavailable` carrying the individual failures.
//!
//! Quickstart
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockcast::{ForecastRequest, InsightsRequest, Stockcast};
//! use stockcast_yahoo::YahooConnector;
//!
//! let yahoo = Arc::new(YahooConnector::new_default()?);
//! let sc = Stockcast::builder().with_connector(yahoo).build()?;
//!
//! let fc = sc.forecast(&ForecastRequest::new("AAPL", 30)).await?;
//! assert_eq!(fc.months.len(), 30);
//!
//! let ins = sc.insights(&InsightsRequest::new("AAPL")).await?;
//! println!("{} ({}%/yr)", ins.label, ins.annual_return);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Stockcast, StockcastBuilder};
pub use router::util::collapse_errors;

// Re-export core types for convenience
pub use stockcast_core::{
    AccessMethod, Bar, Capability, ForecastModel, ForecastRequest, ForecastResult, HistoryMeta,
    HistoryReport, HistoryRequest, HistoryResponse, InsightsRequest, InsightsResult, PricePoint,
    PriceSeries, Range, RawValue, SeriesPoint, StockConnector, StockcastConfig, StockcastError,
    TrendLabel,
};
