//! Mock connectors for CI-safe tests and demos.
//!
//! [`MockConnector`] serves static fixtures keyed by symbol; the special
//! symbols below exercise every failure path of the pipeline:
//!
//! | symbol | behavior |
//! |---|---|
//! | `AAPL`, `MSFT`, `TSLA` | generated weekday series over the requested range |
//! | `STEADY` | four closes with hand-computable statistics |
//! | `NANCLOSE` | bars whose closes are all missing or non-numeric |
//! | `ONEPOINT` | a single usable close |
//! | `EMPTY` | empty responses from every access method |
//! | `DLFAIL` | download fails, ticker history returns `STEADY` |
//! | `FAIL` | every access method fails |
//! | `TIMEOUT` | each call sleeps before answering |
//!
//! [`DynamicMockConnector`] defers to per-symbol behaviors set at runtime.

use async_trait::async_trait;
use stockcast_core::connector::{HistoryProvider, StockConnector};
use stockcast_core::{AccessMethod, HistoryRequest, HistoryResponse, StockcastError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::history::{ANCHOR, STEADY_CLOSES};

const ACCESS_METHODS: &[AccessMethod] = &[AccessMethod::Download, AccessMethod::TickerHistory];

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Name reported by the connector.
    pub const NAME: &'static str = "stockcast-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> StockcastError {
        StockcastError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(symbol: &str, method: AccessMethod) -> Result<(), StockcastError> {
        match (symbol, method) {
            ("FAIL", _) | ("DLFAIL", AccessMethod::Download) => Err(StockcastError::connector(
                Self::NAME,
                format!("forced failure: history via {method}"),
            )),
            ("TIMEOUT", _) => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl StockConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, StockcastError> {
        Self::maybe_fail_or_timeout(symbol, req.method).await?;
        match symbol {
            "DLFAIL" => Ok(fixtures::history::ticker_history_only(req.method)),
            "TIMEOUT" => fixtures::history::by_symbol("STEADY", req.range, req.method)
                .ok_or_else(|| Self::not_found(&format!("history for {symbol}"))),
            s => fixtures::history::by_symbol(s, req.range, req.method)
                .ok_or_else(|| Self::not_found(&format!("history for {s}"))),
        }
    }

    fn access_methods(&self) -> &'static [AccessMethod] {
        ACCESS_METHODS
    }
}
