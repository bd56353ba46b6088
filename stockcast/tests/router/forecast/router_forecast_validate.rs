use serde_json::json;
use stockcast::{ForecastRequest, Stockcast, StockcastError};

use crate::helpers::{AAPL, MockConnector, hist};

fn sc_with_calls() -> (Stockcast, std::sync::Arc<MockConnector>) {
    let c = MockConnector::builder()
        .returns_history_ok(hist(&[1.0, 2.0, 3.0]))
        .build();
    let sc = Stockcast::builder()
        .with_connector(c.clone())
        .max_forecast_periods(365)
        .build()
        .unwrap();
    (sc, c)
}

#[tokio::test]
async fn missing_symbol_is_rejected_without_fetching() {
    let (sc, c) = sc_with_calls();
    let req = ForecastRequest {
        symbol: None,
        periods: Some(json!(10)),
        model: None,
    };

    let err = sc.forecast(&req).await.unwrap_err();

    assert_eq!(err, StockcastError::InvalidArg("Symbol required".into()));
    assert!(c.calls().is_empty());
}

#[tokio::test]
async fn out_of_range_periods_are_rejected_without_fetching() {
    let (sc, c) = sc_with_calls();
    for periods in [json!(0), json!(-3), json!(366), json!("abc"), json!(true)] {
        let req = ForecastRequest {
            symbol: Some(AAPL.into()),
            periods: Some(periods.clone()),
            model: None,
        };
        let err = sc.forecast(&req).await.unwrap_err();
        assert!(
            matches!(err, StockcastError::InvalidArg(_)),
            "periods {periods} gave {err:?}"
        );
    }
    assert!(c.calls().is_empty());
}

#[tokio::test]
async fn numeric_strings_and_floats_are_accepted() {
    let (sc, _c) = sc_with_calls();
    for (periods, want) in [(json!("7"), 7), (json!(4.9), 4), (json!(" 12 "), 12)] {
        let req = ForecastRequest {
            symbol: Some(AAPL.into()),
            periods: Some(periods),
            model: Some(stockcast::ForecastModel::Drift),
        };
        let out = sc.forecast(&req).await.unwrap();
        assert_eq!(out.months.len(), want);
    }
}
