#![allow(dead_code)]
#![allow(clippy::type_complexity)]
#![allow(clippy::cast_possible_truncation)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use stockcast_core::{
    AccessMethod, Bar, HistoryRequest, HistoryResponse, RawValue, StockcastError,
    connector::{HistoryProvider, StockConnector},
};
use tokio::time::{Duration, sleep};

const BOTH_METHODS: &[AccessMethod] = &[AccessMethod::Download, AccessMethod::TickerHistory];

/// Simple in-memory connector used by integration tests.
/// Behavior is scripted per call through `history_fn`; every call is recorded.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub methods: &'static [AccessMethod],
    pub serves_history: bool,
    pub history_fn: Option<
        Arc<dyn Fn(&str, HistoryRequest) -> Result<HistoryResponse, StockcastError> + Send + Sync>,
    >,
    calls: Mutex<Vec<(String, HistoryRequest)>>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<(String, HistoryRequest)> {
        self.calls.lock().unwrap().clone()
    }

    /// Access methods of the calls received so far, in order.
    pub fn methods_called(&self) -> Vec<AccessMethod> {
        self.calls().into_iter().map(|(_, r)| r.method).collect()
    }
}

impl StockConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        if self.serves_history {
            Some(self as &dyn HistoryProvider)
        } else {
            None
        }
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, StockcastError> {
        self.calls.lock().unwrap().push((symbol.to_string(), req));
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }

        if let Some(f) = &self.history_fn {
            return (f)(symbol, req).map(|mut r| {
                r.method = req.method;
                r
            });
        }

        Err(StockcastError::unsupported("history"))
    }

    fn access_methods(&self) -> &'static [AccessMethod] {
        self.methods
    }
}

/* ---------- Tiny builder helpers used by tests ---------- */

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    methods: &'static [AccessMethod],
    serves_history: bool,
    history_fn: Option<
        Arc<dyn Fn(&str, HistoryRequest) -> Result<HistoryResponse, StockcastError> + Send + Sync>,
    >,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            methods: BOTH_METHODS,
            serves_history: true,
            history_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = d.as_millis() as u64;
        self
    }
    pub fn access_methods(mut self, methods: &'static [AccessMethod]) -> Self {
        self.methods = methods;
        self
    }
    pub fn without_history(mut self) -> Self {
        self.serves_history = false;
        self
    }

    pub fn with_history_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, HistoryRequest) -> Result<HistoryResponse, StockcastError>
            + Send
            + Sync
            + 'static,
    {
        self.history_fn = Some(Arc::new(f));
        self
    }
    pub fn returns_history_ok(mut self, resp: HistoryResponse) -> Self {
        self.history_fn = Some(Arc::new(move |_s: &str, _r| Ok(resp.clone())));
        self
    }
    /// Script one outcome per access method; methods not listed answer empty.
    pub fn per_method(
        mut self,
        outcomes: Vec<(AccessMethod, Result<HistoryResponse, StockcastError>)>,
    ) -> Self {
        self.history_fn = Some(Arc::new(move |_s: &str, r: HistoryRequest| {
            outcomes
                .iter()
                .find(|(m, _)| *m == r.method)
                .map_or_else(|| Ok(hist(&[])), |(_, out)| out.clone())
        }));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            methods: self.methods,
            serves_history: self.serves_history,
            history_fn: self.history_fn,
            calls: Mutex::new(Vec::new()),
        })
    }
}

/// Day `n` counted from 2024-01-01 (day 0).
pub fn day(n: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .checked_add_days(chrono::Days::new(n))
        .unwrap()
}

/// Consecutive daily bars starting at day 0.
pub fn bars(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Bar::new(day(i as u64), RawValue::Number(c)))
        .collect()
}

/// History response over consecutive daily bars.
pub fn hist(closes: &[f64]) -> HistoryResponse {
    HistoryResponse {
        bars: bars(closes),
        meta: None,
        method: AccessMethod::Download,
    }
}

/// Convenience constructor for a history-only mock connector that always succeeds.
pub fn m_hist(name: &'static str, closes: &[f64]) -> Arc<MockConnector> {
    MockConnector::builder()
        .name(name)
        .returns_history_ok(hist(closes))
        .build()
}
