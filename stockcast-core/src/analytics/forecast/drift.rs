use super::Predictor;
use crate::analytics::NOT_ENOUGH_DATA;
use crate::series::PriceSeries;
use crate::types::StockcastError;

/// Continues the average daily change of the most recent observations.
///
/// Fits `step = (last - first) / (len - 1)` over a trailing window and
/// predicts `last + step * k` for the k-th future day.
#[derive(Debug, Clone)]
pub struct DriftModel {
    window: usize,
    anchor: Option<f64>,
    step: f64,
}

impl Default for DriftModel {
    fn default() -> Self {
        Self::new(30)
    }
}

impl DriftModel {
    /// Drift over the last `window` observations (at least 2).
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(2),
            anchor: None,
            step: 0.0,
        }
    }

    /// Fitted average daily change.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }
}

impl Predictor for DriftModel {
    fn fit(&mut self, series: &PriceSeries) -> Result<(), StockcastError> {
        self.anchor = None;
        let closes: Vec<f64> = series.closes().collect();
        if closes.len() < 2 {
            return Err(StockcastError::InvalidData(NOT_ENOUGH_DATA.to_string()));
        }
        let recent = &closes[closes.len().saturating_sub(self.window)..];
        let (first, last) = (recent[0], recent[recent.len() - 1]);
        #[allow(clippy::cast_precision_loss)]
        let step = (last - first) / (recent.len() - 1) as f64;
        self.step = step;
        self.anchor = Some(last);
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>, StockcastError> {
        let anchor = self
            .anchor
            .ok_or_else(|| StockcastError::Computation("model not fitted".into()))?;
        #[allow(clippy::cast_precision_loss)]
        let path = (1..=steps).map(|k| anchor + self.step * k as f64).collect();
        Ok(path)
    }

    fn is_fitted(&self) -> bool {
        self.anchor.is_some()
    }

    fn name(&self) -> &'static str {
        "drift"
    }
}
