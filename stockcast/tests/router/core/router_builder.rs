use std::time::Duration;

use stockcast::{Range, Stockcast, StockcastConfig, StockcastError};

use crate::helpers::m_hist;

#[test]
fn build_without_connectors_is_invalid_arg() {
    let err = Stockcast::builder().build().err().unwrap();
    assert!(matches!(err, StockcastError::InvalidArg(_)), "got {err:?}");
}

#[test]
fn defaults_match_config_default() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("a", &[1.0, 2.0]))
        .build()
        .unwrap();
    let cfg = sc.config();
    assert_eq!(cfg.forecast_lookback, Range::Y5);
    assert_eq!(cfg.insights_lookback, Range::Y1);
    assert_eq!(cfg.default_forecast_periods, 180);
    assert_eq!(cfg.max_forecast_periods, 3650);
    assert_eq!(cfg.provider_timeout, Duration::from_secs(15));
}

#[test]
fn setters_are_applied() {
    let sc = Stockcast::builder()
        .with_connector(m_hist("a", &[1.0, 2.0]))
        .with_connector(m_hist("b", &[1.0, 2.0]))
        .forecast_lookback(Range::Y2)
        .insights_lookback(Range::M6)
        .default_forecast_periods(30)
        .max_forecast_periods(365)
        .provider_timeout(Duration::from_millis(250))
        .build()
        .unwrap();
    let cfg = sc.config();
    assert_eq!(cfg.forecast_lookback, Range::Y2);
    assert_eq!(cfg.insights_lookback, Range::M6);
    assert_eq!(cfg.default_forecast_periods, 30);
    assert_eq!(cfg.max_forecast_periods, 365);
    assert_eq!(cfg.provider_timeout, Duration::from_millis(250));
    assert_eq!(sc.connector_names(), vec!["a", "b"]);
}

#[test]
fn default_periods_above_max_is_rejected() {
    let cfg = StockcastConfig {
        default_forecast_periods: 400,
        max_forecast_periods: 365,
        ..StockcastConfig::default()
    };
    let err = Stockcast::builder()
        .with_connector(m_hist("a", &[1.0, 2.0]))
        .config(cfg)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, StockcastError::InvalidArg(_)), "got {err:?}");
}

#[test]
fn duplicate_connector_keys_are_rejected() {
    let err = Stockcast::builder()
        .with_connector(m_hist("a", &[1.0, 2.0]))
        .with_connector(m_hist("a", &[3.0, 4.0]))
        .build()
        .err()
        .unwrap();
    match err {
        StockcastError::InvalidArg(msg) => assert!(msg.contains("'a'"), "got {msg}"),
        other => panic!("expected InvalidArg, got {other:?}"),
    }
}
