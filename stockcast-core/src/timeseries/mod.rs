/// Coercion of raw closes and construction of a clean `PriceSeries`.
pub mod clean;
