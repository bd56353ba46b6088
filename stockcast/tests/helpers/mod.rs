// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

pub use mock_connector::{MockConnector, bars, day, hist, m_hist};

/// Common symbol constants used across tests.
pub const AAPL: &str = "AAPL";
#[allow(dead_code)]
pub const MSFT: &str = "MSFT";

