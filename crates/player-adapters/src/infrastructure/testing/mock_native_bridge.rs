//! Scripted `NativeBridgePort`: each command answers as configured and is
//! recorded for later assertions.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use augment_player_ports::outbound::{NativeBridgePort, NativeError};
use augment_player_ports::{BridgeConstants, ProductDescriptor};

use super::fixtures::test_constants;

/// How a scripted command answers
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    Resolve(T),
    Reject(NativeError),
    /// Never answers
    Hang,
}

impl<T: Clone> Scripted<T> {
    async fn play(self) -> Result<T, NativeError> {
        match self {
            Scripted::Resolve(value) => Ok(value),
            Scripted::Reject(error) => Err(error),
            Scripted::Hang => std::future::pending::<Result<T, NativeError>>().await,
        }
    }
}

/// A command the mock received
#[derive(Debug, Clone, PartialEq)]
pub enum SentCommand {
    Start,
    RecenterProducts,
    AddProduct(ProductDescriptor),
}

struct State {
    start: Scripted<()>,
    recenter: Scripted<()>,
    add_product: Option<Scripted<serde_json::Value>>,
    sent: Vec<SentCommand>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            start: Scripted::Resolve(()),
            recenter: Scripted::Resolve(()),
            add_product: None,
            sent: Vec::new(),
        }
    }
}

/// Mock `NativeBridgePort` for tests.
///
/// Lets tests script each command's outcome and assert which commands were
/// issued. By default every command resolves; add-product echoes its
/// descriptor back.
#[derive(Clone)]
pub struct MockNativeBridge {
    constants: BridgeConstants,
    state: Arc<Mutex<State>>,
}

impl Default for MockNativeBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNativeBridge {
    pub fn new() -> Self {
        Self::with_constants(test_constants())
    }

    pub fn with_constants(constants: BridgeConstants) -> Self {
        Self {
            constants,
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn script_start(&self, outcome: Scripted<()>) -> &Self {
        self.lock().start = outcome;
        self
    }

    pub fn script_recenter(&self, outcome: Scripted<()>) -> &Self {
        self.lock().recenter = outcome;
        self
    }

    pub fn script_add_product(&self, outcome: Scripted<serde_json::Value>) -> &Self {
        self.lock().add_product = Some(outcome);
        self
    }

    pub fn sent_commands(&self) -> Vec<SentCommand> {
        self.lock().sent.clone()
    }

    pub fn start_calls(&self) -> usize {
        self.lock()
            .sent
            .iter()
            .filter(|c| matches!(c, SentCommand::Start))
            .count()
    }
}

#[async_trait]
impl NativeBridgePort for MockNativeBridge {
    fn constants(&self) -> BridgeConstants {
        self.constants.clone()
    }

    async fn start(&self) -> Result<(), NativeError> {
        let outcome = {
            let mut s = self.lock();
            s.sent.push(SentCommand::Start);
            s.start.clone()
        };
        outcome.play().await
    }

    async fn recenter_products(&self) -> Result<(), NativeError> {
        let outcome = {
            let mut s = self.lock();
            s.sent.push(SentCommand::RecenterProducts);
            s.recenter.clone()
        };
        outcome.play().await
    }

    async fn add_product_to_augment_player(
        &self,
        product: ProductDescriptor,
    ) -> Result<serde_json::Value, NativeError> {
        let outcome = {
            let mut s = self.lock();
            s.sent.push(SentCommand::AddProduct(product.clone()));
            s.add_product
                .clone()
                .unwrap_or_else(|| Scripted::Resolve(product.into_value()))
        };
        outcome.play().await
    }
}
