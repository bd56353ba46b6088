use stockcast_core::{ForecastRequest, ForecastResult, StockcastError};

use crate::Stockcast;

impl Stockcast {
    /// Forecast future closes for the symbol named in `req`.
    ///
    /// Fits the requested model (seasonal by default) on the cleaned history of
    /// the configured forecast lookback and projects `periods` calendar days
    /// past the last observed date.
    ///
    /// # Errors
    /// - `InvalidArg` for a missing symbol or an out-of-range `periods`; both are
    ///   checked before any provider is contacted.
    /// - Acquisition and cleaning errors from [`Stockcast::price_series`].
    /// - `InvalidData` with fewer than two clean points; `Computation` when the
    ///   model fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockcast::forecast",
            skip(self, req),
            fields(symbol = ?req.symbol, model = ?req.model),
        )
    )]
    pub async fn forecast(&self, req: &ForecastRequest) -> Result<ForecastResult, StockcastError> {
        let symbol = req.symbol()?;
        let periods =
            req.resolve_periods(self.cfg.default_forecast_periods, self.cfg.max_forecast_periods)?;
        let model = req.model.unwrap_or_default();

        let series = self.price_series(symbol, self.cfg.forecast_lookback).await?;
        let out = stockcast_core::forecast(&series, periods, model)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            symbol = symbol,
            points = series.len(),
            periods = periods,
            "forecast computed"
        );
        Ok(out)
    }
}
