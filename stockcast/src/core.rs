use std::collections::HashSet;
use std::sync::Arc;

use stockcast_core::{ConnectorKey, Range, StockConnector, StockcastError};
use stockcast_types::StockcastConfig;

/// Orchestrator that routes history requests across registered connectors and
/// runs the forecast and insights pipelines on the result.
pub struct Stockcast {
    pub(crate) connectors: Vec<Arc<dyn StockConnector>>,
    pub(crate) cfg: StockcastConfig,
}

/// Builder for constructing a `Stockcast` orchestrator with custom configuration.
pub struct StockcastBuilder {
    connectors: Vec<Arc<dyn StockConnector>>,
    cfg: StockcastConfig,
}

impl Default for StockcastBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StockcastBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: StockcastConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Connectors are tried in registration order; within a connector its
    /// access methods are tried in the order it advertises them.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn StockConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: StockcastConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// History window used to fit forecast models (default 5y).
    #[must_use]
    pub const fn forecast_lookback(mut self, range: Range) -> Self {
        self.cfg.forecast_lookback = range;
        self
    }

    /// History window used for insights (default 1y).
    #[must_use]
    pub const fn insights_lookback(mut self, range: Range) -> Self {
        self.cfg.insights_lookback = range;
        self
    }

    /// Forecast horizon applied when a request omits `periods` (default 180).
    #[must_use]
    pub const fn default_forecast_periods(mut self, periods: usize) -> Self {
        self.cfg.default_forecast_periods = periods;
        self
    }

    /// Largest accepted forecast horizon (default 3650).
    #[must_use]
    pub const fn max_forecast_periods(mut self, periods: usize) -> Self {
        self.cfg.max_forecast_periods = periods;
        self
    }

    /// Set the per-attempt provider timeout.
    ///
    /// Applied to every access method separately, so a connector with two
    /// methods can take up to twice this long before the call gives up.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Build the `Stockcast` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`with_connector`],
    /// if two registered connectors share a key, or if the forecast horizon
    /// settings are inconsistent.
    ///
    /// [`with_connector`]: StockcastBuilder::with_connector
    pub fn build(self) -> Result<Stockcast, StockcastError> {
        if self.connectors.is_empty() {
            return Err(StockcastError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        let mut seen = HashSet::with_capacity(self.connectors.len());
        for c in &self.connectors {
            let key = c.key();
            if !seen.insert(key) {
                return Err(StockcastError::InvalidArg(format!(
                    "connector '{key}' registered more than once"
                )));
            }
        }
        if self.cfg.max_forecast_periods == 0 {
            return Err(StockcastError::InvalidArg(
                "max_forecast_periods must be at least 1".to_string(),
            ));
        }
        if self.cfg.default_forecast_periods == 0
            || self.cfg.default_forecast_periods > self.cfg.max_forecast_periods
        {
            return Err(StockcastError::InvalidArg(format!(
                "default_forecast_periods must be between 1 and {}, got {}",
                self.cfg.max_forecast_periods, self.cfg.default_forecast_periods
            )));
        }

        Ok(Stockcast {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute a provider error to the connector that raised it.
///
/// Errors that already name their origin (or carry a meaning the caller maps
/// on its own) pass through unchanged.
pub(crate) fn tag_err(connector: ConnectorKey, e: StockcastError) -> StockcastError {
    match e {
        e @ (StockcastError::NotFound { .. }
        | StockcastError::ProviderTimeout { .. }
        | StockcastError::Connector { .. }
        | StockcastError::Unsupported { .. }) => e,
        other => StockcastError::Connector {
            connector: connector.as_str().to_string(),
            msg: other.to_string(),
        },
    }
}

impl Stockcast {
    /// Start building a new `Stockcast` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use stockcast_mock::MockConnector;
    ///
    /// let sc = stockcast::Stockcast::builder()
    ///     .with_connector(Arc::new(MockConnector::new()))
    ///     .forecast_lookback(stockcast::Range::Y2)
    ///     .provider_timeout(std::time::Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> StockcastBuilder {
        StockcastBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &StockcastConfig {
        &self.cfg
    }

    /// Names of the registered connectors, in routing order.
    #[must_use]
    pub fn connector_names(&self) -> Vec<&'static str> {
        self.connectors.iter().map(|c| c.name()).collect()
    }

    pub(crate) fn history_connectors(&self) -> Vec<Arc<dyn StockConnector>> {
        self.connectors
            .iter()
            .filter(|c| c.as_history_provider().is_some())
            .cloned()
            .collect()
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockcast::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector.as_str(),
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector: ConnectorKey,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, StockcastError>
    where
        Fut: core::future::Future<Output = Result<T, StockcastError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(StockcastError::provider_timeout(connector.as_str(), capability)))
    }
}
