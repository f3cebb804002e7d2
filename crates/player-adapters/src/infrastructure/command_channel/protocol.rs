//! Messages exchanged with the native side of the command channel

use tokio::sync::{mpsc, oneshot};

use augment_player_ports::outbound::NativeError;
use augment_player_ports::ProductDescriptor;

/// One-shot completion handle for a single command
pub type Responder<T> = oneshot::Sender<Result<T, NativeError>>;

/// A command issued to the native module
#[derive(Debug)]
pub enum NativeCommand {
    Start {
        respond_to: Responder<()>,
    },
    RecenterProducts {
        respond_to: Responder<()>,
    },
    AddProduct {
        product: ProductDescriptor,
        respond_to: Responder<serde_json::Value>,
    },
}

impl NativeCommand {
    pub fn name(&self) -> &'static str {
        match self {
            NativeCommand::Start { .. } => "start",
            NativeCommand::RecenterProducts { .. } => "recenterProducts",
            NativeCommand::AddProduct { .. } => "addProductToAugmentPlayer",
        }
    }

    /// Reject the command with `error`, whatever its kind
    pub fn reject(self, error: NativeError) {
        let delivered = match self {
            NativeCommand::Start { respond_to } | NativeCommand::RecenterProducts { respond_to } => {
                respond_to.send(Err(error)).is_ok()
            }
            NativeCommand::AddProduct { respond_to, .. } => respond_to.send(Err(error)).is_ok(),
        };
        if !delivered {
            tracing::debug!("Command caller went away before rejection was delivered");
        }
    }
}

/// Native-side end of the command channel
#[derive(Debug)]
pub struct NativeCommandReceiver {
    pub(super) rx: mpsc::Receiver<NativeCommand>,
}

impl NativeCommandReceiver {
    /// Next command, or `None` once every bridge handle is dropped
    pub async fn recv(&mut self) -> Option<NativeCommand> {
        self.rx.recv().await
    }

    /// Blocking variant for native threads outside the tokio runtime.
    ///
    /// Panics if called from within an async context (tokio restriction).
    pub fn blocking_recv(&mut self) -> Option<NativeCommand> {
        self.rx.blocking_recv()
    }

    /// Stop accepting new commands; queued ones can still be drained
    pub fn close(&mut self) {
        self.rx.close();
    }
}
