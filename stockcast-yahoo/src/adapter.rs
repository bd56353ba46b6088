#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use stockcast_core::{Range, StockcastError};
use url::Url;

use crate::CONNECTOR_NAME;
use crate::chart::ChartEnvelope;
use crate::config::YahooConfig;

/// Window selector for a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartQuery {
    /// Range token against the download base (`range=5y`).
    Range(Range),
    /// Explicit UTC second bounds against the ticker-history base.
    Period {
        /// Inclusive start, seconds since the epoch.
        start: i64,
        /// Exclusive end, seconds since the epoch.
        end: i64,
    },
}

/// Chart abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YahooChart: Send + Sync {
    /// Fetch the daily chart for `symbol` over `query`.
    async fn chart(&self, symbol: &str, query: ChartQuery)
    -> Result<ChartEnvelope, StockcastError>;
}

/// Real adapter backed by a shared `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    config: YahooConfig,
}

impl RealAdapter {
    /// Build an HTTP client from `config`.
    ///
    /// # Errors
    /// Returns a connector error if the HTTP client cannot be constructed.
    pub fn new(config: YahooConfig) -> Result<Self, StockcastError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| StockcastError::connector(CONNECTOR_NAME, e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn with_client(http: reqwest::Client, config: YahooConfig) -> Self {
        Self { http, config }
    }

    /// Full request URL for `symbol` and `query`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the configured base URL is unusable.
    pub fn chart_url(&self, symbol: &str, query: ChartQuery) -> Result<Url, StockcastError> {
        let base = match query {
            ChartQuery::Range(_) => &self.config.download_base,
            ChartQuery::Period { .. } => &self.config.history_base,
        };
        let mut url = Url::parse(base)
            .map_err(|e| StockcastError::InvalidArg(format!("bad chart base '{base}': {e}")))?;
        url.path_segments_mut()
            .map_err(|()| StockcastError::InvalidArg(format!("chart base '{base}' cannot hold a path")))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        {
            let mut q = url.query_pairs_mut();
            match query {
                ChartQuery::Range(range) => {
                    q.append_pair("range", range.as_str())
                        .append_pair("interval", "1d")
                        .append_pair("includePrePost", "false");
                }
                ChartQuery::Period { start, end } => {
                    q.append_pair("period1", &start.to_string())
                        .append_pair("period2", &end.to_string())
                        .append_pair("interval", "1d")
                        .append_pair("events", "div,split");
                }
            }
        }
        Ok(url)
    }
}

fn map_http_err(e: &reqwest::Error, context: &str) -> StockcastError {
    if e.status() == Some(StatusCode::NOT_FOUND) {
        return StockcastError::not_found(context.to_string());
    }
    if e.is_timeout() {
        return StockcastError::connector(CONNECTOR_NAME, format!("timeout: {context}"));
    }
    if e.is_decode() {
        return StockcastError::connector(CONNECTOR_NAME, format!("decode error: {context}: {e}"));
    }
    StockcastError::connector(CONNECTOR_NAME, e.to_string())
}

#[async_trait]
impl YahooChart for RealAdapter {
    async fn chart(
        &self,
        symbol: &str,
        query: ChartQuery,
    ) -> Result<ChartEnvelope, StockcastError> {
        let context = format!("history for {symbol}");
        let url = self.chart_url(symbol, query)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "requesting yahoo chart");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| map_http_err(&e, &context))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StockcastError::not_found(context));
        }
        if !status.is_success() {
            return Err(StockcastError::connector(
                CONNECTOR_NAME,
                format!("status {status}: {context}"),
            ));
        }
        resp.json::<ChartEnvelope>()
            .await
            .map_err(|e| map_http_err(&e, &context))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YahooChart {
    /// Build a `YahooChart` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YahooChart>
    where
        F: Send + Sync + 'static + Fn(String, ChartQuery) -> Result<ChartEnvelope, StockcastError>,
    {
        struct FnChart<F>(F);
        #[async_trait]
        impl<F> YahooChart for FnChart<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, ChartQuery) -> Result<ChartEnvelope, StockcastError>,
        {
            async fn chart(
                &self,
                symbol: &str,
                query: ChartQuery,
            ) -> Result<ChartEnvelope, StockcastError> {
                (self.0)(symbol.to_string(), query)
            }
        }
        Arc::new(FnChart(f))
    }
}

/// Produce the shared adapter handle a connector is built from.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YahooChart>`.
    fn clone_arc_chart(&self) -> Arc<dyn YahooChart> {
        <dyn YahooChart>::from_fn(|_, _| Err(StockcastError::unsupported("history")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_chart(&self) -> Arc<dyn YahooChart> {
        Arc::new(self.clone()) as Arc<dyn YahooChart>
    }
}
