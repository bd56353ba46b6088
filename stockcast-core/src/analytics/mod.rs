/// Forecast models and the forecast entry point.
pub mod forecast;
/// Annualized return/volatility statistics.
pub mod insights;
/// Daily simple returns and summary statistics.
pub mod returns;

/// Message reported when a series is too short for a computation.
pub const NOT_ENOUGH_DATA: &str = "Not enough valid price data";

/// Round to 2 decimals, halves away from zero.
#[must_use]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
