//! NativeBridgePort adapter over the command channel

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use augment_player_ports::outbound::{NativeBridgePort, NativeError};
use augment_player_ports::{BridgeConstants, ProductDescriptor};

use super::protocol::{NativeCommand, NativeCommandReceiver, Responder};

/// Default queue depth between the player and the native side
pub const DEFAULT_COMMAND_CAPACITY: usize = 32;

/// Create a connected bridge / native receiver pair
pub fn channel(
    constants: BridgeConstants,
    capacity: usize,
) -> (ChannelNativeBridge, NativeCommandReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        ChannelNativeBridge { constants, tx },
        NativeCommandReceiver { rx },
    )
}

/// Native bridge that forwards every command to a [`NativeCommandReceiver`]
#[derive(Clone)]
pub struct ChannelNativeBridge {
    constants: BridgeConstants,
    tx: mpsc::Sender<NativeCommand>,
}

impl ChannelNativeBridge {
    async fn request<T>(
        &self,
        build: impl FnOnce(Responder<T>) -> NativeCommand,
    ) -> Result<T, NativeError> {
        let (respond_to, response) = oneshot::channel();
        let command = build(respond_to);
        let name = command.name();

        self.tx.send(command).await.map_err(|_| {
            tracing::warn!(command = name, "Native side is not accepting commands");
            NativeError::bridge_unavailable()
        })?;

        response.await.map_err(|_| {
            tracing::warn!(command = name, "Native side dropped the command unanswered");
            NativeError::bridge_disconnected()
        })?
    }
}

#[async_trait]
impl NativeBridgePort for ChannelNativeBridge {
    fn constants(&self) -> BridgeConstants {
        self.constants.clone()
    }

    async fn start(&self) -> Result<(), NativeError> {
        self.request(|respond_to| NativeCommand::Start { respond_to })
            .await
    }

    async fn recenter_products(&self) -> Result<(), NativeError> {
        self.request(|respond_to| NativeCommand::RecenterProducts { respond_to })
            .await
    }

    async fn add_product_to_augment_player(
        &self,
        product: ProductDescriptor,
    ) -> Result<serde_json::Value, NativeError> {
        self.request(|respond_to| NativeCommand::AddProduct {
            product,
            respond_to,
        })
        .await
    }
}
