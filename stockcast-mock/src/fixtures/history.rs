use chrono::{Datelike, NaiveDate, Weekday};
use stockcast_core::{AccessMethod, Bar, HistoryMeta, HistoryResponse, Range, RawValue};

/// Last trading day covered by the generated fixtures.
pub const ANCHOR: (i32, u32, u32) = (2024, 12, 31);

/// Closes of the `STEADY` fixture: +10%, -10%, +10%.
pub const STEADY_CLOSES: [f64; 4] = [100.0, 110.0, 99.0, 108.9];

pub fn by_symbol(s: &str, range: Range, method: AccessMethod) -> Option<HistoryResponse> {
    let bars = match s {
        "AAPL" => generated(range, |i| 150.0 + 0.05 * i + 8.0 * (i / 15.0).sin()),
        "MSFT" => generated(range, |i| 320.0 + 0.12 * i + 12.0 * (i / 40.0).cos()),
        "TSLA" => generated(range, |i| 260.0 - 0.04 * i + 25.0 * (i / 9.0).sin()),
        "STEADY" => from_closes(&STEADY_CLOSES),
        "NANCLOSE" => {
            let start = anchor() - chrono::Days::new(3);
            vec![
                Bar::new(start, RawValue::Null),
                Bar::new(start + chrono::Days::new(1), f64::NAN),
                Bar::new(start + chrono::Days::new(2), "n/a"),
                Bar::new(start + chrono::Days::new(3), RawValue::Null),
            ]
        }
        "ONEPOINT" => from_closes(&[42.0]),
        "EMPTY" => Vec::new(),
        _ => return None,
    };
    Some(response(bars, method))
}

/// `DLFAIL`: ticker history works while the download path is broken.
pub fn ticker_history_only(method: AccessMethod) -> HistoryResponse {
    response(from_closes(&STEADY_CLOSES), method)
}

fn response(bars: Vec<Bar>, method: AccessMethod) -> HistoryResponse {
    HistoryResponse {
        bars,
        meta: Some(HistoryMeta {
            currency: Some("USD".into()),
            exchange_timezone: Some("America/New_York".into()),
            gmt_offset_seconds: Some(-18_000),
        }),
        method,
    }
}

fn anchor() -> NaiveDate {
    let (y, m, d) = ANCHOR;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn from_closes(closes: &[f64]) -> Vec<Bar> {
    let start = anchor() - chrono::Days::new(closes.len() as u64);
    start
        .iter_days()
        .skip(1)
        .zip(closes)
        .map(|(d, &c)| Bar::new(d, c))
        .collect()
}

/// Weekday closes from `range` before the anchor up to the anchor.
fn generated(range: Range, f: impl Fn(f64) -> f64) -> Vec<Bar> {
    let end = anchor();
    let start = range
        .start_from(end.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
        .date_naive()
        // keep fixture size bounded for `max`
        .max(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default());
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .enumerate()
        .map(|(i, d)| {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64;
            Bar::new(d, f(x))
        })
        .collect()
}
