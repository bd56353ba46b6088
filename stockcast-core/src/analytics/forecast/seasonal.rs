//! Additive trend + seasonality regression.
//!
//! `y(t) = trend(t) + yearly(t) + weekly(t)` where the trend is piecewise
//! linear with changepoints in the first part of the history and each
//! seasonal term is a truncated Fourier series. All coefficients are fitted
//! jointly by ridge regression; intercept and base slope are unpenalized.

use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate};

use super::Predictor;
use super::linalg::ridge_solve;
use crate::analytics::NOT_ENOUGH_DATA;
use crate::series::PriceSeries;
use crate::types::StockcastError;

const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;
const YEAR_DAYS: f64 = 365.25;
const WEEK_DAYS: f64 = 7.0;
const YEARLY_MIN_SPAN_DAYS: f64 = 730.0;
const WEEKLY_MIN_SPAN_DAYS: f64 = 14.0;

/// Tuning knobs for [`SeasonalModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalConfig {
    /// Upper bound on trend changepoints.
    pub n_changepoints: usize,
    /// Fraction of the history (by observation count) eligible for changepoints.
    pub changepoint_range: f64,
    /// Fourier order of the yearly term.
    pub yearly_order: usize,
    /// Fourier order of the weekly term.
    pub weekly_order: usize,
    /// Ridge penalty on changepoint slope deltas.
    pub changepoint_penalty: f64,
    /// Ridge penalty on seasonal coefficients. Must be positive.
    pub seasonality_penalty: f64,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            n_changepoints: 25,
            changepoint_range: 0.8,
            yearly_order: 10,
            weekly_order: 3,
            changepoint_penalty: 10.0,
            seasonality_penalty: 0.01,
        }
    }
}

#[derive(Debug, Clone)]
struct Fitted {
    origin: NaiveDate,
    last: NaiveDate,
    span_days: f64,
    y_scale: f64,
    changepoints: Vec<f64>,
    yearly: bool,
    weekly: bool,
    beta: Vec<f64>,
}

/// Piecewise-linear trend with yearly and weekly Fourier seasonality.
#[derive(Debug, Clone, Default)]
pub struct SeasonalModel {
    config: SeasonalConfig,
    fitted: Option<Fitted>,
}

impl SeasonalModel {
    /// Model with default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Model with custom tuning.
    #[must_use]
    pub const fn with_config(config: SeasonalConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    /// Changepoint locations on the scaled `[0, 1]` time axis, once fitted.
    #[must_use]
    pub fn changepoints(&self) -> &[f64] {
        self.fitted
            .as_ref()
            .map(|f| f.changepoints.as_slice())
            .unwrap_or_default()
    }

    /// Whether the yearly term was enabled by the last fit.
    #[must_use]
    pub fn has_yearly(&self) -> bool {
        self.fitted.as_ref().is_some_and(|f| f.yearly)
    }

    /// Whether the weekly term was enabled by the last fit.
    #[must_use]
    pub fn has_weekly(&self) -> bool {
        self.fitted.as_ref().is_some_and(|f| f.weekly)
    }

    fn row(&self, f: &Fitted, date: NaiveDate) -> Vec<f64> {
        #[allow(clippy::cast_precision_loss)]
        let t = (date - f.origin).num_days() as f64 / f.span_days;
        let epoch_day = f64::from(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE);

        let mut row = Vec::with_capacity(2 + f.changepoints.len() + 2 * self.seasonal_terms(f));
        row.push(1.0);
        row.push(t);
        row.extend(f.changepoints.iter().map(|s| (t - s).max(0.0)));
        if f.yearly {
            push_fourier(&mut row, epoch_day, YEAR_DAYS, self.config.yearly_order);
        }
        if f.weekly {
            push_fourier(&mut row, epoch_day, WEEK_DAYS, self.config.weekly_order);
        }
        row
    }

    const fn seasonal_terms(&self, f: &Fitted) -> usize {
        let mut n = 0;
        if f.yearly {
            n += self.config.yearly_order;
        }
        if f.weekly {
            n += self.config.weekly_order;
        }
        n
    }

    fn penalties(&self, f: &Fitted) -> Vec<f64> {
        let mut pen = vec![0.0, 0.0];
        pen.extend(std::iter::repeat_n(
            self.config.changepoint_penalty,
            f.changepoints.len(),
        ));
        pen.extend(std::iter::repeat_n(
            self.config.seasonality_penalty,
            2 * self.seasonal_terms(f),
        ));
        pen
    }
}

fn push_fourier(row: &mut Vec<f64>, day: f64, period: f64, order: usize) {
    for k in 1..=order {
        #[allow(clippy::cast_precision_loss)]
        let angle = TAU * k as f64 * day / period;
        row.push(angle.sin());
        row.push(angle.cos());
    }
}

/// Changepoints at evenly spaced observations of the first `range` share of
/// the history, expressed on the scaled time axis.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn place_changepoints(scaled_t: &[f64], max: usize, range: f64) -> Vec<f64> {
    let hist = ((scaled_t.len() as f64) * range).floor() as usize;
    let k = max.min(hist.saturating_sub(1));
    if k == 0 {
        return Vec::new();
    }
    let last_idx = (hist - 1) as f64;
    (1..=k)
        .map(|j| {
            let idx = (j as f64 * last_idx / k as f64).round() as usize;
            scaled_t[idx]
        })
        .collect()
}

impl Predictor for SeasonalModel {
    fn fit(&mut self, series: &PriceSeries) -> Result<(), StockcastError> {
        self.fitted = None;
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Err(StockcastError::InvalidData(NOT_ENOUGH_DATA.to_string()));
        };
        if series.len() < 2 {
            return Err(StockcastError::InvalidData(NOT_ENOUGH_DATA.to_string()));
        }

        #[allow(clippy::cast_precision_loss)]
        let span_days = (last.date - first.date).num_days() as f64;
        let max_abs = series.closes().fold(0.0_f64, |m, y| m.max(y.abs()));
        let y_scale = if max_abs > 0.0 { max_abs } else { 1.0 };

        #[allow(clippy::cast_precision_loss)]
        let scaled_t: Vec<f64> = series
            .points()
            .iter()
            .map(|p| (p.date - first.date).num_days() as f64 / span_days)
            .collect();

        let mut fitted = Fitted {
            origin: first.date,
            last: last.date,
            span_days,
            y_scale,
            changepoints: place_changepoints(
                &scaled_t,
                self.config.n_changepoints,
                self.config.changepoint_range,
            ),
            yearly: self.config.yearly_order > 0 && span_days >= YEARLY_MIN_SPAN_DAYS,
            weekly: self.config.weekly_order > 0 && span_days >= WEEKLY_MIN_SPAN_DAYS,
            beta: Vec::new(),
        };

        let rows: Vec<Vec<f64>> = series
            .points()
            .iter()
            .map(|p| self.row(&fitted, p.date))
            .collect();
        let ys: Vec<f64> = series.closes().map(|y| y / y_scale).collect();
        fitted.beta = ridge_solve(&rows, &ys, &self.penalties(&fitted))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "stockcast::forecast",
            points = series.len(),
            changepoints = fitted.changepoints.len(),
            yearly = fitted.yearly,
            weekly = fitted.weekly,
            "fitted seasonal model"
        );

        self.fitted = Some(fitted);
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>, StockcastError> {
        let f = self
            .fitted
            .as_ref()
            .ok_or_else(|| StockcastError::Computation("model not fitted".into()))?;
        Ok(f.last
            .iter_days()
            .skip(1)
            .take(steps)
            .map(|d| {
                let row = self.row(f, d);
                row.iter().zip(&f.beta).map(|(x, b)| x * b).sum::<f64>() * f.y_scale
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn name(&self) -> &'static str {
        "seasonal"
    }
}
