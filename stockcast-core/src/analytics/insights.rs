//! Annualized risk/return statistics.
//!
//! Daily simple returns are annualized over 252 trading days: the mean is
//! scaled linearly and the sample standard deviation by `sqrt(252)`. Both are
//! reported in percent.

use crate::analytics::returns::{mean, sample_std, simple_returns};
use crate::analytics::{NOT_ENOUGH_DATA, round2};
use crate::series::PriceSeries;
use crate::types::{InsightsResult, StockcastError, TrendLabel};

/// Trading days per year used for annualization.
pub const TRADING_DAYS: f64 = 252.0;

/// Compute annualized return, volatility, risk score and trend label.
///
/// Label and risk score are derived from the unrounded statistics; all
/// numeric outputs are rounded to 2 decimals.
///
/// # Errors
/// - `InvalidData("Not enough valid price data")` when fewer than two returns exist.
/// - `Computation` when a statistic is not finite.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "stockcast_core::insights",
        skip(series),
        fields(points = series.len()),
    )
)]
pub fn insights(series: &PriceSeries) -> Result<InsightsResult, StockcastError> {
    let returns = simple_returns(series);
    if returns.len() < 2 {
        return Err(StockcastError::InvalidData(NOT_ENOUGH_DATA.to_string()));
    }
    let (Some(mu), Some(sd)) = (mean(&returns), sample_std(&returns)) else {
        return Err(StockcastError::InvalidData(NOT_ENOUGH_DATA.to_string()));
    };

    let annual_return = mu * TRADING_DAYS * 100.0;
    let annual_volatility = sd * TRADING_DAYS.sqrt() * 100.0;
    if !annual_return.is_finite() || !annual_volatility.is_finite() {
        return Err(StockcastError::Computation(
            "non-finite return statistics".into(),
        ));
    }
    let risk_score = (annual_volatility / 2.0).clamp(1.0, 100.0);

    Ok(InsightsResult {
        annual_return: round2(annual_return),
        annual_volatility: round2(annual_volatility),
        risk_score: round2(risk_score),
        label: TrendLabel::classify(annual_return),
    })
}
