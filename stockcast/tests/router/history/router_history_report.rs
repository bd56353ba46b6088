use stockcast::{Bar, HistoryResponse, Range, RawValue, Stockcast, StockcastError};

use crate::helpers::{MockConnector, day};

#[tokio::test]
async fn report_is_cleaned_and_sorted() {
    let resp = HistoryResponse {
        bars: vec![
            Bar::new(day(2), RawValue::Number(12.0)),
            Bar::new(day(0), RawValue::Text(" 10.5 ".into())),
            Bar::new(day(1), RawValue::Null),
            Bar::new(day(1), RawValue::Number(f64::NAN)),
            Bar::new(day(3), RawValue::Text("n/a".into())),
            Bar::new(day(2), RawValue::Number(12.5)),
        ],
        meta: None,
        method: stockcast::AccessMethod::Download,
    };
    let c = MockConnector::builder().returns_history_ok(resp).build();
    let sc = Stockcast::builder().with_connector(c).build().unwrap();

    let report = sc.history_report(" MSFT", Range::M3).await.unwrap();

    assert_eq!(report.symbol, "MSFT");
    assert_eq!(report.range, Range::M3);
    let got: Vec<(String, f64)> = report
        .series
        .iter()
        .map(|p| (p.time.clone(), p.close))
        .collect();
    assert_eq!(
        got,
        vec![
            ("2024-01-01".to_string(), 10.5),
            ("2024-01-03".to_string(), 12.5),
        ]
    );
}

#[tokio::test]
async fn all_unusable_closes_is_invalid_data() {
    let resp = HistoryResponse {
        bars: vec![
            Bar::new(day(0), RawValue::Null),
            Bar::new(day(1), RawValue::Number(f64::NAN)),
        ],
        meta: None,
        method: stockcast::AccessMethod::Download,
    };
    let c = MockConnector::builder().returns_history_ok(resp).build();
    let sc = Stockcast::builder().with_connector(c).build().unwrap();

    let err = sc.price_series("MSFT", Range::Y1).await.unwrap_err();

    assert_eq!(err, StockcastError::InvalidData("Invalid data".into()));
}
