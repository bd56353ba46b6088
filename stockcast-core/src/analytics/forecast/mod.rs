//! Forecast models and the forecast entry point.
//!
//! Models implement [`Predictor`]: fit on a cleaned [`PriceSeries`], then
//! predict one value per calendar day following the last observation.

mod drift;
mod linalg;
mod seasonal;

pub use drift::DriftModel;
pub use seasonal::{SeasonalConfig, SeasonalModel};

use chrono::NaiveDate;

use crate::analytics::{NOT_ENOUGH_DATA, round2};
use crate::series::PriceSeries;
use crate::types::{ForecastModel, ForecastResult, StockcastError};

/// Fit/predict interface shared by every forecast model.
pub trait Predictor {
    /// Fit the model to a cleaned series.
    ///
    /// # Errors
    /// `InvalidData` when the series is too short, `Computation` when the fit fails numerically.
    fn fit(&mut self, series: &PriceSeries) -> Result<(), StockcastError>;

    /// Predict the next `steps` calendar days after the last fitted observation.
    ///
    /// # Errors
    /// `Computation` when called before a successful fit.
    fn predict(&self, steps: usize) -> Result<Vec<f64>, StockcastError>;

    /// Whether a fit has succeeded.
    fn is_fitted(&self) -> bool;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}

/// Build an unfitted predictor for the selected model.
#[must_use]
pub fn predictor_for(model: ForecastModel) -> Box<dyn Predictor + Send> {
    match model {
        ForecastModel::Seasonal => Box::new(SeasonalModel::new()),
        ForecastModel::Drift => Box::new(DriftModel::default()),
    }
}

/// The `periods` calendar days following `last`.
#[must_use]
pub fn future_dates(last: NaiveDate, periods: usize) -> Vec<NaiveDate> {
    last.iter_days().skip(1).take(periods).collect()
}

/// Fit `model` on `series` and project `periods` future days.
///
/// Prices are rounded to 2 decimals and aligned with `YYYY-MM-DD` dates.
///
/// # Errors
/// - `InvalidData("Not enough valid price data")` with fewer than two points.
/// - `Computation` when the fit fails or produces non-finite predictions.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "stockcast_core::forecast",
        skip(series),
        fields(points = series.len(), periods = periods, model = model.label()),
    )
)]
pub fn forecast(
    series: &PriceSeries,
    periods: usize,
    model: ForecastModel,
) -> Result<ForecastResult, StockcastError> {
    let last = match series.last() {
        Some(p) if series.len() >= 2 => p.date,
        _ => return Err(StockcastError::InvalidData(NOT_ENOUGH_DATA.to_string())),
    };

    let mut predictor = predictor_for(model);
    predictor.fit(series)?;
    let values = predictor.predict(periods)?;
    let dates = future_dates(last, periods);

    if values.len() != periods || dates.len() != periods {
        return Err(StockcastError::Computation(format!(
            "{} produced {} of {periods} periods",
            predictor.name(),
            values.len().min(dates.len())
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(StockcastError::Computation(format!(
            "{} produced non-finite predictions",
            predictor.name()
        )));
    }

    Ok(ForecastResult {
        months: dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect(),
        prices: values.into_iter().map(round2).collect(),
        model: model.label().to_string(),
    })
}
