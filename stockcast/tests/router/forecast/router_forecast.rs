use chrono::NaiveDate;
use stockcast::{ForecastModel, ForecastRequest, Range, Stockcast, StockcastError};

use crate::helpers::{AAPL, MockConnector, m_hist};

fn linear(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 + i as f64).collect()
}

fn parse(d: &str) -> NaiveDate {
    NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()
}

#[tokio::test]
async fn seasonal_forecast_has_requested_length_and_increasing_dates() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("m", &linear(90)))
        .build()
        .unwrap();

    let out = sc.forecast(&ForecastRequest::new(AAPL, 45)).await.unwrap();

    assert_eq!(out.months.len(), 45);
    assert_eq!(out.prices.len(), 45);
    assert_eq!(out.model, "Additive Seasonal Forecast");
    // history covers 2024-01-01 ..= 2024-03-30
    assert_eq!(out.months[0], "2024-03-31");
    let dates: Vec<NaiveDate> = out.months.iter().map(|m| parse(m)).collect();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    assert!(out.prices.iter().all(|p| p.is_finite()));
}

#[tokio::test]
async fn drift_forecast_continues_average_step() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("m", &linear(60)))
        .build()
        .unwrap();

    let req = ForecastRequest::new(AAPL, 10).with_model(ForecastModel::Drift);
    let out = sc.forecast(&req).await.unwrap();

    assert_eq!(out.model, "Linear Drift Forecast");
    assert_eq!(out.prices.first().copied(), Some(160.0));
    assert_eq!(out.prices.last().copied(), Some(169.0));
}

#[tokio::test]
async fn default_periods_apply_when_absent() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("m", &linear(30)))
        .default_forecast_periods(14)
        .build()
        .unwrap();

    let req = ForecastRequest {
        symbol: Some(AAPL.into()),
        periods: None,
        model: Some(ForecastModel::Drift),
    };
    let out = sc.forecast(&req).await.unwrap();

    assert_eq!(out.months.len(), 14);
}

#[tokio::test]
async fn forecast_fetches_the_forecast_lookback() {
    let c = MockConnector::builder()
        .returns_history_ok(crate::helpers::hist(&linear(20)))
        .build();
    let sc = Stockcast::builder()
        .with_connector(c.clone())
        .forecast_lookback(Range::Y2)
        .build()
        .unwrap();

    sc.forecast(&ForecastRequest::new(AAPL, 3)).await.unwrap();

    assert_eq!(c.calls()[0].1.range, Range::Y2);
}

#[tokio::test]
async fn single_clean_point_is_not_enough() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("m", &[42.0]))
        .build()
        .unwrap();

    let err = sc
        .forecast(&ForecastRequest::new(AAPL, 5))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        StockcastError::InvalidData("Not enough valid price data".into())
    );
}
