//! stockcast-core
//!
//! Core types, traits, and analytics shared across the stockcast workspace.
//!
//! - `types`: history request/response shapes and re-exports from `stockcast-types`.
//! - `connector`: the `StockConnector` trait and the `HistoryProvider` capability.
//! - `series`: the validated `PriceSeries` every computation consumes.
//! - `timeseries`: cleaning raw provider bars into a `PriceSeries`.
//! - `analytics`: daily returns, annualized insights and forecast models.
#![warn(missing_docs)]

/// Insight statistics and forecast models over a cleaned price series.
pub mod analytics;
/// Connector capability traits and the primary `StockConnector` interface.
pub mod connector;
/// Validated, date-ordered close series.
pub mod series;
/// Cleaning of raw provider output.
pub mod timeseries;
pub mod types;

pub use analytics::forecast::{
    DriftModel, Predictor, SeasonalConfig, SeasonalModel, forecast, future_dates, predictor_for,
};
pub use analytics::insights::insights;
pub use analytics::returns::simple_returns;
pub use connector::{HistoryProvider, StockConnector};
pub use series::{PricePoint, PriceSeries};
pub use timeseries::clean::{clean_closes, coerce_close};
pub use types::*;
