//! Stockcast data transfer objects, errors and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod reports;
mod requests;

pub use capability::Capability;
pub use config::{Range, StockcastConfig};
pub use connector::ConnectorKey;
pub use error::StockcastError;
pub use reports::{ForecastResult, HistoryReport, InsightsResult, SeriesPoint, TrendLabel};
pub use requests::{
    ForecastModel, ForecastRequest, InsightsRequest, SYMBOL_REQUIRED, require_symbol,
};
