use stockcast_core::{InsightsRequest, InsightsResult, StockcastError};

use crate::Stockcast;

impl Stockcast {
    /// Annualized return, volatility, risk score and trend label for a symbol,
    /// computed over the configured insights lookback.
    ///
    /// # Errors
    /// - `InvalidArg` for a missing symbol.
    /// - Acquisition and cleaning errors from [`Stockcast::price_series`].
    /// - `InvalidData("Not enough valid price data")` with fewer than two returns.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockcast::insights",
            skip(self, req),
            fields(symbol = ?req.symbol),
        )
    )]
    pub async fn insights(&self, req: &InsightsRequest) -> Result<InsightsResult, StockcastError> {
        let symbol = req.symbol()?;
        let series = self.price_series(symbol, self.cfg.insights_lookback).await?;
        stockcast_core::insights(&series)
    }
}
