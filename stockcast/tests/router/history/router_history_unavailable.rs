use stockcast::{AccessMethod, Range, Stockcast, StockcastError};

use crate::helpers::{AAPL, MockConnector, hist};

#[tokio::test]
async fn both_methods_empty_is_data_unavailable_without_causes() {
    let c = MockConnector::builder().returns_history_ok(hist(&[])).build();
    let sc = Stockcast::builder().with_connector(c.clone()).build().unwrap();

    let err = sc.history(AAPL, Range::Y1).await.unwrap_err();

    assert_eq!(
        err,
        StockcastError::data_unavailable("history for AAPL", vec![])
    );
    assert_eq!(c.calls().len(), 2);
}

#[tokio::test]
async fn both_methods_failing_lists_each_cause_in_order() {
    let c = MockConnector::builder()
        .name("yf")
        .per_method(vec![
            (
                AccessMethod::Download,
                Err(StockcastError::connector("yf", "download broke")),
            ),
            (
                AccessMethod::TickerHistory,
                Err(StockcastError::Other("history broke".into())),
            ),
        ])
        .build();
    let sc = Stockcast::builder().with_connector(c).build().unwrap();

    let err = sc.history(AAPL, Range::Y1).await.unwrap_err();

    match err {
        StockcastError::DataUnavailable { what, causes } => {
            assert_eq!(what, "history for AAPL");
            assert_eq!(
                causes,
                vec![
                    StockcastError::connector("yf", "download broke"),
                    // untagged errors are attributed to the connector
                    StockcastError::connector("yf", "unknown error: history broke"),
                ]
            );
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unknown_symbol_is_not_found_like() {
    let c = MockConnector::builder()
        .with_history_fn(|s: &str, _r| Err(StockcastError::not_found(format!("history for {s}"))))
        .build();
    let sc = Stockcast::builder().with_connector(c).build().unwrap();

    let err = sc.history("ZZZZ", Range::Y1).await.unwrap_err();

    assert!(err.is_not_found_like());
    let flat = err.flatten();
    assert_eq!(flat.len(), 2);
    assert!(
        flat.iter()
            .all(|e| matches!(e, StockcastError::NotFound { .. }))
    );
}

#[tokio::test]
async fn no_history_capable_connector_is_unsupported() {
    let c = MockConnector::builder().without_history().build();
    let sc = Stockcast::builder().with_connector(c.clone()).build().unwrap();

    let err = sc.history(AAPL, Range::Y1).await.unwrap_err();

    assert_eq!(err, StockcastError::unsupported("history"));
    assert!(c.calls().is_empty());
}

#[tokio::test]
async fn blank_symbol_is_rejected_before_any_call() {
    let c = MockConnector::builder()
        .returns_history_ok(hist(&[1.0, 2.0]))
        .build();
    let sc = Stockcast::builder().with_connector(c.clone()).build().unwrap();

    let err = sc.history("   ", Range::Y1).await.unwrap_err();

    assert_eq!(err, StockcastError::InvalidArg("Symbol required".into()));
    assert!(c.calls().is_empty());
}
