use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use stockcast_core::connector::{HistoryProvider, StockConnector};
use stockcast_core::{AccessMethod, HistoryRequest, HistoryResponse, StockcastError};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(StockcastError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    // `None` method means "any access method"
    history_rules: HashMap<(String, Option<AccessMethod>), MockBehavior<HistoryResponse>>,
    history_calls: Vec<(String, HistoryRequest)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `history` calls for a symbol, regardless of access method.
    pub async fn set_history_behavior(
        &self,
        symbol: &str,
        behavior: MockBehavior<HistoryResponse>,
    ) {
        let mut guard = self.state.lock().await;
        guard
            .history_rules
            .insert((symbol.to_string(), None), behavior);
    }

    /// Set the behavior for `history` calls for a symbol and one access method.
    ///
    /// Method-specific rules take precedence over symbol-wide rules.
    pub async fn set_method_behavior(
        &self,
        symbol: &str,
        method: AccessMethod,
        behavior: MockBehavior<HistoryResponse>,
    ) {
        let mut guard = self.state.lock().await;
        guard
            .history_rules
            .insert((symbol.to_string(), Some(method)), behavior);
    }

    /// Return a copy of the history call log in call order.
    pub async fn history_calls(&self) -> Vec<(String, HistoryRequest)> {
        self.state.lock().await.history_calls.clone()
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn StockConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn StockConnector>, controller)
    }
}

impl StockConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, StockcastError> {
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.history_calls.push((symbol.to_string(), req));
            guard
                .history_rules
                .get(&(symbol.to_string(), Some(req.method)))
                .or_else(|| guard.history_rules.get(&(symbol.to_string(), None)))
                .cloned()
        };

        match behavior {
            Some(MockBehavior::Return(mut resp)) => {
                resp.method = req.method;
                Ok(resp)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(StockcastError::unsupported("history")),
        }
    }

    fn access_methods(&self) -> &'static [AccessMethod] {
        &[AccessMethod::Download, AccessMethod::TickerHistory]
    }
}
