use crate::series::PriceSeries;

/// Simple returns `p[i] / p[i-1] - 1` between consecutive closes.
///
/// Non-finite returns (a zero previous close) are dropped.
#[must_use]
pub fn simple_returns(series: &PriceSeries) -> Vec<f64> {
    series
        .points()
        .windows(2)
        .map(|w| w[1].close / w[0].close - 1.0)
        .filter(|r| r.is_finite())
        .collect()
}

/// Arithmetic mean; `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Sample standard deviation (n - 1 denominator); `None` below two values.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_std(xs: &[f64]) -> Option<f64> {
    if xs.len() < 2 {
        return None;
    }
    let m = mean(xs)?;
    let ss: f64 = xs.iter().map(|x| (x - m).powi(2)).sum();
    Some((ss / (xs.len() - 1) as f64).sqrt())
}
