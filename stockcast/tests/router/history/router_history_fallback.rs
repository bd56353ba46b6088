use stockcast::{AccessMethod, Range, Stockcast, StockcastError};

use crate::helpers::{AAPL, MockConnector, hist};

#[tokio::test]
async fn empty_download_falls_back_to_ticker_history_once() {
    let c = MockConnector::builder()
        .name("yf")
        .per_method(vec![
            (AccessMethod::Download, Ok(hist(&[]))),
            (AccessMethod::TickerHistory, Ok(hist(&[10.0, 11.0, 12.0]))),
        ])
        .build();
    let sc = Stockcast::builder().with_connector(c.clone()).build().unwrap();

    let out = sc.history(AAPL, Range::Y1).await.unwrap();

    assert_eq!(out.bars.len(), 3);
    assert_eq!(out.method, AccessMethod::TickerHistory);
    assert_eq!(
        c.methods_called(),
        vec![AccessMethod::Download, AccessMethod::TickerHistory]
    );
}

#[tokio::test]
async fn failing_download_falls_back_to_ticker_history_once() {
    let c = MockConnector::builder()
        .name("yf")
        .per_method(vec![
            (
                AccessMethod::Download,
                Err(StockcastError::connector("yf", "status 500")),
            ),
            (AccessMethod::TickerHistory, Ok(hist(&[10.0, 11.0]))),
        ])
        .build();
    let sc = Stockcast::builder().with_connector(c.clone()).build().unwrap();

    let out = sc.history(AAPL, Range::Y1).await.unwrap();

    assert_eq!(out.method, AccessMethod::TickerHistory);
    assert_eq!(
        c.methods_called(),
        vec![AccessMethod::Download, AccessMethod::TickerHistory]
    );
}

#[tokio::test]
async fn non_empty_download_is_not_followed_by_second_attempt() {
    let c = MockConnector::builder()
        .name("yf")
        .per_method(vec![
            (AccessMethod::Download, Ok(hist(&[1.0, 2.0]))),
            (AccessMethod::TickerHistory, Ok(hist(&[3.0, 4.0, 5.0]))),
        ])
        .build();
    let sc = Stockcast::builder().with_connector(c.clone()).build().unwrap();

    let out = sc.history(AAPL, Range::M6).await.unwrap();

    assert_eq!(out.method, AccessMethod::Download);
    assert_eq!(out.bars.len(), 2);
    assert_eq!(c.methods_called(), vec![AccessMethod::Download]);
    assert_eq!(c.calls()[0].1.range, Range::M6);
    assert_eq!(c.calls()[0].0, AAPL);
}

#[tokio::test]
async fn falls_through_to_next_connector_when_first_is_exhausted() {
    let first = MockConnector::builder()
        .name("first")
        .with_history_fn(|_s: &str, _r| Err(StockcastError::connector("first", "down")))
        .build();
    let second = MockConnector::builder()
        .name("second")
        .returns_history_ok(hist(&[5.0, 6.0]))
        .build();
    let sc = Stockcast::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .build()
        .unwrap();

    let out = sc.history(AAPL, Range::Y1).await.unwrap();

    assert_eq!(out.bars.len(), 2);
    assert_eq!(first.calls().len(), 2);
    assert_eq!(second.methods_called(), vec![AccessMethod::Download]);
}

#[tokio::test]
async fn single_method_connector_gets_a_single_attempt() {
    let c = MockConnector::builder()
        .name("one")
        .access_methods(&[AccessMethod::TickerHistory])
        .returns_history_ok(hist(&[]))
        .build();
    let sc = Stockcast::builder().with_connector(c.clone()).build().unwrap();

    let err = sc.history(AAPL, Range::Y1).await.unwrap_err();

    assert!(matches!(err, StockcastError::DataUnavailable { .. }));
    assert_eq!(c.methods_called(), vec![AccessMethod::TickerHistory]);
}

#[tokio::test]
async fn symbol_is_trimmed_before_reaching_provider() {
    let c = MockConnector::builder()
        .returns_history_ok(hist(&[1.0, 2.0]))
        .build();
    let sc = Stockcast::builder().with_connector(c.clone()).build().unwrap();

    sc.history("  AAPL ", Range::Y1).await.unwrap();

    assert_eq!(c.calls()[0].0, "AAPL");
}
