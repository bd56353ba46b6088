//! stockcast-yahoo
//!
//! Public connector that implements `StockConnector` on top of the Yahoo
//! Finance v8 chart endpoint. Daily history is reachable through two access
//! methods: a range-addressed download and a period-addressed ticker history,
//! each against its own base URL.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// Chart payload shapes and conversion into history responses.
pub mod chart;
mod config;

pub use config::{DEFAULT_USER_AGENT, YahooConfig};

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{ChartQuery, RealAdapter, YahooChart};
use async_trait::async_trait;
use chrono::Utc;
use stockcast_core::{
    AccessMethod, HistoryRequest, HistoryResponse, StockcastError,
    connector::{HistoryProvider, StockConnector},
};

pub(crate) const CONNECTOR_NAME: &str = "stockcast-yahoo";

#[cfg(feature = "test-adapters")]
type ChartAdapter = Arc<dyn YahooChart>;
#[cfg(not(feature = "test-adapters"))]
type ChartAdapter = Arc<RealAdapter>;

/// Public connector type. Production users will construct with `YahooConnector::new_default()`.
pub struct YahooConnector {
    chart: ChartAdapter,
}

impl YahooConnector {
    const ACCESS_METHODS: &'static [AccessMethod] =
        &[AccessMethod::Download, AccessMethod::TickerHistory];

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn normalize_error(e: StockcastError, what: &str) -> StockcastError {
        match e {
            StockcastError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    StockcastError::not_found(what.to_string())
                } else {
                    StockcastError::connector(CONNECTOR_NAME, msg)
                }
            }
            StockcastError::Other(msg) => StockcastError::connector(CONNECTOR_NAME, msg),
            other => other,
        }
    }

    /// Build against the public Yahoo endpoints.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, StockcastError> {
        Self::new(YahooConfig::default())
    }

    /// Build with custom endpoints and HTTP settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: YahooConfig) -> Result<Self, StockcastError> {
        let a = RealAdapter::new(config)?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from a provided `reqwest::Client`.
    #[must_use]
    pub fn new_with_reqwest_client(http: reqwest::Client, config: YahooConfig) -> Self {
        Self::from_adapter(&RealAdapter::with_client(http, config))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            chart: adapter.clone_arc_chart(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into a shared handle.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        Self {
            chart: Arc::new(adapter.clone()),
        }
    }

    fn query_for(req: HistoryRequest) -> ChartQuery {
        match req.method {
            AccessMethod::Download => ChartQuery::Range(req.range),
            AccessMethod::TickerHistory => {
                let now = Utc::now();
                ChartQuery::Period {
                    start: req.range.start_from(now).timestamp(),
                    end: now.timestamp(),
                }
            }
        }
    }
}

#[async_trait]
impl HistoryProvider for YahooConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockcast_yahoo::history",
            skip(self),
            fields(range = %req.range, method = %req.method),
        )
    )]
    async fn history(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, StockcastError> {
        let what = format!("history for {symbol}");
        let raw = self
            .chart
            .chart(symbol, Self::query_for(req))
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;
        chart::into_history(raw, req.method, &what)
    }

    fn access_methods(&self) -> &'static [AccessMethod] {
        Self::ACCESS_METHODS
    }
}

impl StockConnector for YahooConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}
