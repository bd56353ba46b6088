use std::sync::Arc;

use stockcast::{ForecastRequest, InsightsRequest, Stockcast, StockcastError, TrendLabel};
use stockcast_mock::MockConnector;

fn fixture_stockcast() -> Stockcast {
    Stockcast::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn steady_fixture_insights() {
    let out = fixture_stockcast()
        .insights(&InsightsRequest::new("STEADY"))
        .await
        .unwrap();
    assert_eq!(out.annual_return, 840.0);
    assert_eq!(out.annual_volatility, 183.3);
    assert_eq!(out.risk_score, 91.65);
    assert_eq!(out.label, TrendLabel::StrongUptrend);
}

#[tokio::test]
async fn download_failure_falls_back_to_ticker_history() {
    let out = fixture_stockcast()
        .insights(&InsightsRequest::new("DLFAIL"))
        .await
        .unwrap();
    assert_eq!(out.annual_return, 840.0);
}

#[tokio::test]
async fn nan_closes_are_invalid_data() {
    let err = fixture_stockcast()
        .insights(&InsightsRequest::new("NANCLOSE"))
        .await
        .unwrap_err();
    assert_eq!(err, StockcastError::InvalidData("Invalid data".into()));
}

#[tokio::test]
async fn single_point_is_not_enough() {
    let err = fixture_stockcast()
        .forecast(&ForecastRequest::new("ONEPOINT", 5))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StockcastError::InvalidData("Not enough valid price data".into())
    );
}

#[tokio::test]
async fn unknown_empty_and_failing_symbols_are_unavailable() {
    let sc = fixture_stockcast();
    for sym in ["ZZZZ", "EMPTY", "FAIL"] {
        let err = sc
            .insights(&InsightsRequest::new(sym))
            .await
            .unwrap_err();
        match err {
            StockcastError::DataUnavailable { what, .. } => {
                assert_eq!(what, format!("history for {sym}"));
            }
            other => panic!("{sym}: unexpected {other:?}"),
        }
    }
}

#[tokio::test]
async fn generated_fixture_forecasts() {
    let out = fixture_stockcast()
        .forecast(&ForecastRequest::new("MSFT", 30))
        .await
        .unwrap();
    assert_eq!(out.months.len(), 30);
    assert!(out.prices.iter().all(|p| p.is_finite()));
}
