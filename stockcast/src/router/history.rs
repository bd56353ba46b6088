use stockcast_core::{
    Capability, HistoryReport, HistoryRequest, HistoryResponse, PriceSeries, Range,
    StockcastError, clean_closes, require_symbol,
};

use crate::Stockcast;
use crate::router::util::collapse_errors;

impl Stockcast {
    /// Fetch daily history for `symbol` over `range`.
    ///
    /// Behavior:
    /// - Connectors are tried in registration order. For each, its advertised
    ///   access methods are tried in order, each bounded by the provider timeout.
    /// - The first non-empty response wins; no further attempt is made.
    /// - An empty response or a failed attempt moves on to the next method.
    ///
    /// # Errors
    /// - `InvalidArg` for a blank symbol.
    /// - `Unsupported("history")` when no registered connector serves history.
    /// - `DataUnavailable` when every attempt was empty or failed; `causes`
    ///   lists the failures in attempt order.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockcast::history",
            skip(self),
            fields(symbol = %symbol, range = %range),
        )
    )]
    pub async fn history(
        &self,
        symbol: &str,
        range: Range,
    ) -> Result<HistoryResponse, StockcastError> {
        let symbol = require_symbol(Some(symbol))?;
        let capability = Capability::History.as_str();

        let mut attempted_any = false;
        let mut errors: Vec<StockcastError> = Vec::new();

        for c in self.history_connectors() {
            let Some(hp) = c.as_history_provider() else {
                continue;
            };
            for &method in hp.access_methods() {
                attempted_any = true;
                let req = HistoryRequest::new(range, method);
                let fut = hp.history(symbol, req);
                match Self::provider_call_with_timeout(
                    c.key(),
                    capability,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(resp) if !resp.is_empty() => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            connector = c.name(),
                            method = %method,
                            bars = resp.bars.len(),
                            "history attempt succeeded"
                        );
                        return Ok(resp);
                    }
                    Ok(_) => {
                        #[cfg(feature = "tracing")]
                        tracing::info!(
                            connector = c.name(),
                            method = %method,
                            "history attempt returned no bars; falling back"
                        );
                    }
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            connector = c.name(),
                            method = %method,
                            error = %e,
                            "history attempt failed; falling back"
                        );
                        errors.push(crate::core::tag_err(c.key(), e));
                    }
                }
            }
        }

        Err(collapse_errors(
            Capability::History,
            attempted_any,
            errors,
            format!("history for {symbol}"),
        ))
    }

    /// Fetch history and clean it into a validated close series.
    ///
    /// # Errors
    /// Everything [`Stockcast::history`] returns, plus `InvalidData("Invalid data")`
    /// when no close survives cleaning.
    pub async fn price_series(
        &self,
        symbol: &str,
        range: Range,
    ) -> Result<PriceSeries, StockcastError> {
        let resp = self.history(symbol, range).await?;
        clean_closes(&resp.bars)
    }

    /// Cleaned close history for `symbol`, shaped for display.
    ///
    /// # Errors
    /// Same as [`Stockcast::price_series`].
    pub async fn history_report(
        &self,
        symbol: &str,
        range: Range,
    ) -> Result<HistoryReport, StockcastError> {
        let series = self.price_series(symbol, range).await?;
        Ok(HistoryReport {
            symbol: symbol.trim().to_string(),
            range,
            series: series.to_series_points(),
        })
    }
}
