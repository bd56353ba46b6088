//! stockcast-server
//!
//! HTTP front end for the stockcast orchestrator.
//!
//! Routes
//! - `GET /` liveness banner.
//! - `GET /health` `{status, version}`.
//! - `POST /forecast` `{symbol, periods?, model?}` → `{months, prices, model}`.
//! - `POST /insights` `{symbol}` → `{annualReturn, annualVolatility, riskScore, label}`.
//! - `GET /history/{symbol}?range=1y` → cleaned close series.
//!
//! Failures are returned as `{"error": message}`; see [`ApiError`] for the
//! status mapping.
#![warn(missing_docs)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use stockcast::{StockConnector, Stockcast};
use stockcast_mock::MockConnector;
use stockcast_yahoo::YahooConnector;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Orchestrator serving every route.
    pub stockcast: Arc<Stockcast>,
}

impl AppState {
    /// Wrap a built orchestrator for sharing between handlers.
    #[must_use]
    pub fn new(stockcast: Stockcast) -> Self {
        Self {
            stockcast: Arc::new(stockcast),
        }
    }
}

/// Build the router with CORS open to any origin and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/forecast", post(routes::forecast))
        .route("/insights", post(routes::insights))
        .route("/history/{symbol}", get(routes::history))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Build the orchestrator described by `cfg`: the fixture connector when
/// `use_mock` is set, Yahoo otherwise.
///
/// # Errors
/// Connector construction failures and invalid orchestrator settings.
pub fn build_stockcast(cfg: &ServerConfig) -> Result<Stockcast, ServerError> {
    let connector: Arc<dyn StockConnector> = if cfg.use_mock {
        Arc::new(MockConnector::new())
    } else {
        Arc::new(YahooConnector::new(cfg.yahoo.clone())?)
    };
    tracing::info!(
        connector = connector.name(),
        vendor = connector.vendor(),
        "registering connector"
    );
    let sc = Stockcast::builder()
        .with_connector(connector)
        .config(cfg.stockcast.clone())
        .build()?;
    Ok(sc)
}
