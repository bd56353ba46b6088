use stockcast_core::{Capability, StockcastError};

/// Collapse the failed attempts of an acquisition into a uniform `StockcastError`.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - Else → `DataUnavailable(what, errors)`; `errors` lists only failed
///   attempts, so it is empty when every attempt answered with no data.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<StockcastError>,
    what: impl Into<String>,
) -> StockcastError {
    if !attempted_any {
        return StockcastError::unsupported(capability.to_string());
    }
    StockcastError::data_unavailable(what, errors)
}
