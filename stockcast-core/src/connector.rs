use async_trait::async_trait;

use crate::types::{AccessMethod, HistoryRequest, HistoryResponse};
use stockcast_types::StockcastError;
pub use stockcast_types::ConnectorKey;

/// Focused role trait for connectors that provide daily close history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch daily history for `symbol` using the access method named in `req`.
    ///
    /// An empty `bars` vector is a valid answer and means the provider had
    /// nothing for this window; callers decide whether to fall back.
    async fn history(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, StockcastError>;

    /// REQUIRED: access methods this connector serves, in the order they should be tried.
    fn access_methods(&self) -> &'static [AccessMethod];
}

/// Main connector trait implemented by market-data providers.
///
/// Capabilities are advertised through `as_*_provider` accessors so the
/// orchestrator can skip connectors that cannot serve a request.
pub trait StockConnector: Send + Sync {
    /// A stable identifier for logs and errors (e.g., "stockcast-yahoo").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }
}
