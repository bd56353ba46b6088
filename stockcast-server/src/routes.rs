//! Request handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use stockcast::{
    ForecastRequest, ForecastResult, HistoryReport, InsightsRequest, InsightsResult, Range,
};

use crate::AppState;
use crate::error::ApiError;

/// Liveness text served at `/`.
pub const ROOT_BANNER: &str = "Stockcast ML Service Running";

/// `GET /`
pub async fn root() -> &'static str {
    ROOT_BANNER
}

/// Liveness probe with the server version.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Decode a JSON body, treating an empty body as `{}`.
///
/// Well-formed JSON whose fields hold unusable values is reported as an
/// invalid request rather than as malformed JSON.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(raw).map_err(|e| match e.classify() {
        Category::Data => ApiError::bad_request(format!("invalid request: {e}")),
        _ => ApiError::bad_request(format!("malformed JSON body: {e}")),
    })
}

/// `POST /forecast`: fit the requested model and project `periods` days ahead.
pub async fn forecast(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ForecastResult>, ApiError> {
    let req: ForecastRequest = parse_body(&body)?;
    let out = state.stockcast.forecast(&req).await?;
    Ok(Json(out))
}

/// `POST /insights`: annualized return, volatility and risk over the insights window.
pub async fn insights(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<InsightsResult>, ApiError> {
    let req: InsightsRequest = parse_body(&body)?;
    let out = state.stockcast.insights(&req).await?;
    Ok(Json(out))
}

/// Query string of `GET /history/{symbol}`.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Lookback token such as `6mo` or `5y`; defaults to `1y`.
    pub range: Option<String>,
}

/// `GET /history/{symbol}`: cleaned close series with acquisition metadata.
pub async fn history(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(q): Query<HistoryQuery>,
) -> Result<Json<HistoryReport>, ApiError> {
    let range = match q.range.as_deref() {
        Some(raw) => raw.parse::<Range>()?,
        None => Range::Y1,
    };
    let out = state.stockcast.history_report(&symbol, range).await?;
    Ok(Json(out))
}
