use stockcast::{InsightsRequest, Range, Stockcast, StockcastError, TrendLabel};

use crate::helpers::{AAPL, MockConnector, hist, m_hist};

#[tokio::test]
async fn insights_match_hand_computed_values() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("m", &[100.0, 110.0, 99.0, 108.9]))
        .build()
        .unwrap();

    let out = sc.insights(&InsightsRequest::new(AAPL)).await.unwrap();

    assert_eq!(out.annual_return, 840.0);
    assert_eq!(out.annual_volatility, 183.3);
    assert_eq!(out.risk_score, 91.65);
    assert_eq!(out.label, TrendLabel::StrongUptrend);
}

#[tokio::test]
async fn insights_fetch_the_insights_lookback() {
    let c = MockConnector::builder()
        .returns_history_ok(hist(&[100.0, 101.0, 102.0]))
        .build();
    let sc = Stockcast::builder()
        .with_connector(c.clone())
        .insights_lookback(Range::M3)
        .build()
        .unwrap();

    sc.insights(&InsightsRequest::new(AAPL)).await.unwrap();

    assert_eq!(c.calls()[0].1.range, Range::M3);
}

#[tokio::test]
async fn missing_symbol_is_invalid_arg() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("m", &[1.0, 2.0, 3.0]))
        .build()
        .unwrap();

    let err = sc
        .insights(&InsightsRequest { symbol: None })
        .await
        .unwrap_err();

    assert_eq!(err, StockcastError::InvalidArg("Symbol required".into()));
}

#[tokio::test]
async fn two_points_give_one_return_which_is_not_enough() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("m", &[1.0, 2.0]))
        .build()
        .unwrap();

    let err = sc.insights(&InsightsRequest::new(AAPL)).await.unwrap_err();

    assert_eq!(
        err,
        StockcastError::InvalidData("Not enough valid price data".into())
    );
}
