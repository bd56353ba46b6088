//! Request payloads accepted by the forecast and insights operations.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::StockcastError;

/// Message used when a request carries no usable symbol.
pub const SYMBOL_REQUIRED: &str = "Symbol required";

/// Forecast model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastModel {
    /// Additive piecewise-linear trend with yearly and weekly seasonality.
    #[default]
    Seasonal,
    /// Linear continuation of the recent average daily change.
    Drift,
}

impl ForecastModel {
    /// Human-readable model name reported back to clients.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seasonal => "Additive Seasonal Forecast",
            Self::Drift => "Linear Drift Forecast",
        }
    }
}

impl FromStr for ForecastModel {
    type Err = StockcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seasonal" => Ok(Self::Seasonal),
            "drift" => Ok(Self::Drift),
            _ => Err(StockcastError::InvalidArg(format!(
                "unknown model '{s}' (expected seasonal or drift)"
            ))),
        }
    }
}

fn deserialize_model<'de, D>(deserializer: D) -> Result<Option<ForecastModel>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| raw.parse::<ForecastModel>().map_err(serde::de::Error::custom))
        .transpose()
}

/// Body of a forecast request.
///
/// `periods` is kept as raw JSON so integers, floats and numeric strings are
/// all accepted; see [`ForecastRequest::resolve_periods`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Ticker symbol, e.g. `"AAPL"` or `"RELIANCE.NS"`.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Requested horizon in days.
    #[serde(default)]
    pub periods: Option<Value>,
    /// Model to fit; defaults to [`ForecastModel::Seasonal`].
    #[serde(default, deserialize_with = "deserialize_model")]
    pub model: Option<ForecastModel>,
}

impl ForecastRequest {
    /// Convenience constructor for a symbol and an explicit horizon.
    pub fn new(symbol: impl Into<String>, periods: usize) -> Self {
        Self {
            symbol: Some(symbol.into()),
            periods: Some(Value::from(periods)),
            model: None,
        }
    }

    /// Select the model to fit.
    #[must_use]
    pub const fn with_model(mut self, model: ForecastModel) -> Self {
        self.model = Some(model);
        self
    }

    /// The trimmed symbol.
    ///
    /// # Errors
    /// Returns `InvalidArg("Symbol required")` when the symbol is missing or blank.
    pub fn symbol(&self) -> Result<&str, StockcastError> {
        require_symbol(self.symbol.as_deref())
    }

    /// Resolve the requested horizon, falling back to `default` when absent.
    ///
    /// Floats are truncated toward zero; strings must hold an integer.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the value is not numeric or falls outside `1..=max`.
    pub fn resolve_periods(&self, default: usize, max: usize) -> Result<usize, StockcastError> {
        let raw: i64 = match &self.periods {
            None | Some(Value::Null) => return Ok(default),
            Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => i,
                #[allow(clippy::cast_possible_truncation)]
                (None, Some(f)) if f.is_finite() => f.trunc() as i64,
                _ => return Err(invalid_periods(n)),
            },
            Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid_periods(s))?,
            Some(other) => return Err(invalid_periods(other)),
        };
        match usize::try_from(raw) {
            Ok(p) if (1..=max).contains(&p) => Ok(p),
            _ => Err(StockcastError::InvalidArg(format!(
                "periods must be between 1 and {max}, got {raw}"
            ))),
        }
    }
}

/// Body of an insights request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsRequest {
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: Option<String>,
}

impl InsightsRequest {
    /// Convenience constructor.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
        }
    }

    /// The trimmed symbol.
    ///
    /// # Errors
    /// Returns `InvalidArg("Symbol required")` when the symbol is missing or blank.
    pub fn symbol(&self) -> Result<&str, StockcastError> {
        require_symbol(self.symbol.as_deref())
    }
}

/// Trim a raw symbol and reject it when empty.
///
/// # Errors
/// Returns `InvalidArg("Symbol required")` for `None` or whitespace-only input.
pub fn require_symbol(raw: Option<&str>) -> Result<&str, StockcastError> {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(StockcastError::InvalidArg(SYMBOL_REQUIRED.to_string())),
    }
}

fn invalid_periods(v: impl std::fmt::Display) -> StockcastError {
    StockcastError::InvalidArg(format!("periods must be an integer, got {v}"))
}
