use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the stockcast workspace.
///
/// This wraps capability mismatches, argument validation errors, data-quality
/// failures, provider-tagged failures and the aggregate produced when every
/// acquisition attempt came back empty or failed.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum StockcastError {
    /// The requested capability is not implemented by any registered connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "history").
        capability: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Provider data was present but unusable after cleaning.
    #[error("{0}")]
    InvalidData(String),

    /// A statistical or model computation failed (singular system, non-finite output).
    #[error("computation failed: {0}")]
    Computation(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A symbol or resource is unknown to the provider.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// Every acquisition attempt returned an empty result or failed.
    #[error("no data available: {what}")]
    DataUnavailable {
        /// Description of the missing data, e.g. "history for AAPL".
        what: String,
        /// Individual attempt failures, in attempt order. Empty results are not listed.
        causes: Vec<StockcastError>,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "history").
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl StockcastError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `DataUnavailable` aggregate from the failed attempts.
    pub fn data_unavailable(what: impl Into<String>, causes: Vec<Self>) -> Self {
        Self::DataUnavailable {
            what: what.into(),
            causes,
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Returns true for errors that mean "the provider has nothing for this symbol".
    #[must_use]
    pub const fn is_not_found_like(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::DataUnavailable { .. })
    }

    /// Flatten nested `DataUnavailable` causes into a plain vector.
    ///
    /// A `DataUnavailable` without causes (all attempts were empty) is kept as-is.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::DataUnavailable { causes, .. } if !causes.is_empty() => {
                causes.into_iter().flat_map(Self::flatten).collect()
            }
            other => vec![other],
        }
    }
}
