//! Augment player component
//!
//! The element host applications embed. It owns the two-phase lifecycle:
//!
//! 1. [`AugmentPlayer::create`] subscribes to the native loading events.
//! 2. [`AugmentPlayer::attach_to_surface`] mounts the native view and issues
//!    the start handshake; its outcome reaches `on_player_ready` exactly once.
//!
//! Loading events are independent of readiness and are forwarded to the
//! loader callback in every state but `Detached`.

mod options;
mod state;

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use augment_player_ports::inbound::{LoadingStatus, ProgressPayload};
use augment_player_ports::outbound::{
    NativeBridgeHandle, NativeError, Subscription, ViewSurfacePort,
};
use augment_player_ports::{NativeViewSpec, ProductDescriptor, ViewProps};

use crate::application::config::PlayerTimeouts;
use crate::application::error::PlayerError;

pub use options::{LoaderCallback, PlayerOptions, ReadyCallback};
pub use state::PlayerState;

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

struct Shared {
    state: PlayerState,
    loader_callback: Option<LoaderCallback>,
    on_player_ready: Option<ReadyCallback>,
    subscriptions: Vec<Subscription>,
}

struct PlayerInner {
    id: u64,
    native: NativeBridgeHandle,
    view: ViewProps,
    timeouts: PlayerTimeouts,
    shared: Mutex<Shared>,
}

impl PlayerInner {
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The loader callback, unless the player was torn down.
    ///
    /// Checked under the same lock `teardown` takes, so at most one event
    /// already past this point can still reach the callback after teardown.
    fn loader_callback(&self) -> Option<LoaderCallback> {
        let shared = self.lock();
        if shared.state == PlayerState::Detached {
            return None;
        }
        shared.loader_callback.clone()
    }

    fn handle_loading_progress(&self, payload: &serde_json::Value) {
        let Some(callback) = self.loader_callback() else {
            return;
        };
        match ProgressPayload::decode(payload) {
            Ok(decoded) => {
                if decoded.adjusted {
                    tracing::warn!(
                        player = self.id,
                        raw = %decoded.raw,
                        progress = decoded.status.progress,
                        "Native progress adjusted into range"
                    );
                }
                callback(decoded.status);
            }
            Err(e) => {
                tracing::warn!(player = self.id, error = %e, "Dropping loading progress event");
            }
        }
    }

    fn handle_loading_over(&self) {
        if let Some(callback) = self.loader_callback() {
            callback(LoadingStatus::complete());
        }
    }
}

/// Player component wrapping the native AR view.
///
/// Cloning yields another handle to the same instance. The instance (and its
/// event subscriptions) lives until [`teardown`](Self::teardown) or until the
/// last handle is dropped.
#[derive(Clone)]
pub struct AugmentPlayer {
    inner: Arc<PlayerInner>,
}

impl AugmentPlayer {
    /// Construct the player and subscribe it to the native loading events.
    pub fn create(native: NativeBridgeHandle, options: PlayerOptions) -> Self {
        let PlayerOptions {
            loader_callback,
            on_player_ready,
            view,
            timeouts,
        } = options;

        let inner = Arc::new(PlayerInner {
            id: NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed),
            native,
            view,
            timeouts,
            shared: Mutex::new(Shared {
                state: PlayerState::Constructed,
                loader_callback,
                on_player_ready,
                subscriptions: Vec::with_capacity(2),
            }),
        });

        let constants = inner.native.constants().clone();
        let events = Arc::clone(inner.native.events());

        let weak = Arc::downgrade(&inner);
        let progress = events.subscribe(
            &constants.loading_progress_event,
            Arc::new(move |payload: &serde_json::Value| {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_loading_progress(payload);
                }
            }),
        );

        let weak = Arc::downgrade(&inner);
        let over = events.subscribe(
            &constants.loading_over_event,
            Arc::new(move |_: &serde_json::Value| {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_loading_over();
                }
            }),
        );

        inner.lock().subscriptions.extend([progress, over]);
        tracing::debug!(player = inner.id, "Player created");

        Self { inner }
    }

    pub fn state(&self) -> PlayerState {
        self.inner.lock().state
    }

    pub fn is_ready(&self) -> bool {
        self.state() == PlayerState::Ready
    }

    pub fn view_props(&self) -> &ViewProps {
        &self.inner.view
    }

    /// The native view this player renders, with its props forwarded as-is
    pub fn render(&self) -> NativeViewSpec {
        NativeViewSpec {
            component_name: self.inner.native.constants().native_view_name.clone(),
            props: self.inner.view.clone(),
        }
    }

    /// Mount the native view on `surface` and issue the start handshake.
    ///
    /// Returns once the view is mounted; the handshake outcome is delivered
    /// later through `on_player_ready`. Must be called within a tokio runtime.
    pub fn attach_to_surface(&self, surface: &dyn ViewSurfacePort) -> Result<(), PlayerError> {
        let runtime = {
            let mut shared = self.inner.lock();
            match shared.state {
                PlayerState::Constructed => {}
                PlayerState::Detached => return Err(PlayerError::Detached),
                _ => return Err(PlayerError::AlreadyAttached),
            }
            let runtime = Handle::try_current().map_err(|_| PlayerError::NoRuntime)?;
            // Claimed before mounting so a concurrent attach is rejected
            shared.state = PlayerState::AwaitingStart;
            runtime
        };

        if let Err(e) = surface.mount_native_view(&self.render()) {
            let mut shared = self.inner.lock();
            if shared.state == PlayerState::AwaitingStart {
                shared.state = PlayerState::Constructed;
            }
            return Err(e.into());
        }
        tracing::info!(player = self.inner.id, "Native view mounted, starting player");

        let weak = Arc::downgrade(&self.inner);
        let bridge = Arc::clone(self.inner.native.bridge());
        let timeout = self.inner.timeouts.start;
        runtime.spawn(async move {
            let result = with_timeout("start", timeout, bridge.start()).await;
            complete_start(weak, result);
        });

        Ok(())
    }

    /// Re-center the placed products.
    ///
    /// The caller is not suspended. A native failure is logged and
    /// swallowed; only lifecycle misuse is reported. The returned handle may
    /// be awaited to know when the native side answered.
    pub fn recenter_products(&self) -> Result<JoinHandle<()>, PlayerError> {
        self.ensure_ready()?;
        let runtime = Handle::try_current().map_err(|_| PlayerError::NoRuntime)?;

        let id = self.inner.id;
        let bridge = Arc::clone(self.inner.native.bridge());
        let timeout = self.inner.timeouts.command;
        Ok(runtime.spawn(async move {
            match with_timeout("recenter_products", timeout, bridge.recenter_products()).await {
                Ok(()) => tracing::debug!(player = id, "Products recentered"),
                Err(e) => tracing::error!(player = id, error = %e, "Failed to recenter products"),
            }
        }))
    }

    /// Add a product to the AR scene; the native outcome is returned unchanged.
    pub async fn add_product(
        &self,
        product: ProductDescriptor,
    ) -> Result<serde_json::Value, PlayerError> {
        self.ensure_ready()?;
        let bridge = Arc::clone(self.inner.native.bridge());
        with_timeout(
            "add_product",
            self.inner.timeouts.command,
            bridge.add_product_to_augment_player(product),
        )
        .await
    }

    /// Dispose the event subscriptions and drop the host callbacks.
    ///
    /// Idempotent. A start outcome arriving afterwards is discarded.
    pub fn teardown(&self) {
        let (subscriptions, loader, ready) = {
            let mut shared = self.inner.lock();
            if shared.state == PlayerState::Detached {
                return;
            }
            shared.state = PlayerState::Detached;
            (
                std::mem::take(&mut shared.subscriptions),
                shared.loader_callback.take(),
                shared.on_player_ready.take(),
            )
        };
        for subscription in subscriptions {
            tracing::debug!(
                player = self.inner.id,
                event = subscription.event_name(),
                "Unsubscribing"
            );
            subscription.dispose();
        }
        drop((loader, ready));
        tracing::info!(player = self.inner.id, "Player torn down");
    }

    fn ensure_ready(&self) -> Result<(), PlayerError> {
        match self.state() {
            PlayerState::Ready => Ok(()),
            state => Err(PlayerError::NotReady { state }),
        }
    }
}

impl fmt::Debug for AugmentPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AugmentPlayer")
            .field("id", &self.inner.id)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

async fn with_timeout<T>(
    operation: &'static str,
    limit: Option<Duration>,
    call: impl Future<Output = Result<T, NativeError>>,
) -> Result<T, PlayerError> {
    let outcome = match limit {
        Some(after) => tokio::time::timeout(after, call)
            .await
            .map_err(|_| PlayerError::Timeout { operation, after })?,
        None => call.await,
    };
    outcome.map_err(PlayerError::Native)
}

fn complete_start(weak: Weak<PlayerInner>, result: Result<(), PlayerError>) {
    let Some(inner) = weak.upgrade() else {
        tracing::debug!("Player dropped before start completed");
        return;
    };

    let callback = {
        let mut shared = inner.lock();
        if shared.state != PlayerState::AwaitingStart {
            tracing::debug!(
                player = inner.id,
                state = %shared.state,
                "Discarding start outcome"
            );
            return;
        }
        shared.state = match result {
            Ok(()) => PlayerState::Ready,
            Err(_) => PlayerState::Failed,
        };
        shared.on_player_ready.take()
    };

    match &result {
        Ok(()) => tracing::info!(player = inner.id, "Player ready"),
        Err(e) => tracing::warn!(player = inner.id, error = %e, "Player failed to start"),
    }

    match callback {
        Some(on_player_ready) => {
            on_player_ready(result.map(|()| AugmentPlayer { inner }));
        }
        None => tracing::debug!(player = inner.id, "No on_player_ready callback supplied"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augment_player_adapters::infrastructure::testing::{
        sample_product, test_constants, MockNativeBridge, RecordingSurface, Scripted,
        SentCommand, TEST_OVER_EVENT, TEST_PROGRESS_EVENT,
    };
    use augment_player_adapters::infrastructure::EventChannel;
    use augment_player_ports::outbound::{MockNativeBridgePort, MockViewSurfacePort};
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::oneshot;

    struct Harness {
        channel: EventChannel,
        bridge: MockNativeBridge,
        statuses: Arc<Mutex<Vec<LoadingStatus>>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                channel: EventChannel::new(),
                bridge: MockNativeBridge::new(),
                statuses: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn handle(&self) -> NativeBridgeHandle {
            NativeBridgeHandle::new(
                Arc::new(self.bridge.clone()),
                Arc::new(self.channel.clone()),
            )
        }

        fn options(&self) -> PlayerOptions {
            let statuses = Arc::clone(&self.statuses);
            PlayerOptions::new().with_loader_callback(move |status| {
                statuses.lock().expect("lock").push(status);
            })
        }

        fn statuses(&self) -> Vec<LoadingStatus> {
            self.statuses.lock().expect("lock").clone()
        }
    }

    fn ready_channel(
        options: PlayerOptions,
    ) -> (
        PlayerOptions,
        oneshot::Receiver<Result<AugmentPlayer, PlayerError>>,
    ) {
        let (tx, rx) = oneshot::channel();
        let options = options.on_player_ready(move |result| {
            let _ = tx.send(result);
        });
        (options, rx)
    }

    async fn ready_player(h: &Harness) -> AugmentPlayer {
        let (options, rx) = ready_channel(h.options());
        let player = AugmentPlayer::create(h.handle(), options);
        player
            .attach_to_surface(&RecordingSurface::new())
            .expect("attach");
        rx.await.expect("callback fired").expect("player ready");
        player
    }

    #[test]
    fn progress_then_over_produces_unified_statuses_in_order() {
        let h = Harness::new();
        let _player = AugmentPlayer::create(h.handle(), h.options());

        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": 10 }));
        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": 55 }));
        h.channel.emit(TEST_OVER_EVENT, json!({ "whatever": [1, 2, 3] }));

        assert_eq!(
            h.statuses(),
            vec![
                LoadingStatus { show: true, progress: 10 },
                LoadingStatus { show: true, progress: 55 },
                LoadingStatus { show: false, progress: 100 },
            ]
        );
    }

    #[test]
    fn repeated_events_are_neither_merged_nor_reordered() {
        let h = Harness::new();
        let _player = AugmentPlayer::create(h.handle(), h.options());

        for progress in [30, 30, 20] {
            h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": progress }));
        }
        h.channel.emit(TEST_OVER_EVENT, json!(null));
        h.channel.emit(TEST_OVER_EVENT, json!(null));

        let progress: Vec<_> = h.statuses().iter().map(|s| (s.show, s.progress)).collect();
        assert_eq!(
            progress,
            vec![(true, 30), (true, 30), (true, 20), (false, 100), (false, 100)]
        );
    }

    #[test]
    fn malformed_progress_is_dropped_and_out_of_range_is_clamped() {
        let h = Harness::new();
        let _player = AugmentPlayer::create(h.handle(), h.options());

        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "percent": 10 }));
        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": 250 }));

        assert_eq!(h.statuses(), vec![LoadingStatus { show: true, progress: 100 }]);
    }

    #[test]
    fn float_and_oversized_progress_reach_the_loader() {
        let h = Harness::new();
        let _player = AugmentPlayer::create(h.handle(), h.options());

        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": 55.0 }));
        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": 42.5 }));
        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": u64::MAX }));

        let progress: Vec<u8> = h.statuses().iter().map(|s| s.progress).collect();
        assert_eq!(progress, vec![55, 43, 100]);
    }

    #[test]
    fn events_without_loader_callback_are_ignored() {
        let h = Harness::new();
        let player = AugmentPlayer::create(h.handle(), PlayerOptions::new());

        assert_eq!(h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": 5 })), 1);
        assert_eq!(player.state(), PlayerState::Constructed);
    }

    #[test]
    fn render_forwards_view_props_unchanged() {
        let h = Harness::new();
        let mut view = ViewProps {
            test_id: Some("ar".into()),
            accessibility_label: Some("AR player".into()),
            ..ViewProps::default()
        };
        view.style.height = Some(320.0);
        view.extra.insert("zoomEnabled".into(), json!(false));

        let player = AugmentPlayer::create(h.handle(), PlayerOptions::new().with_view(view.clone()));
        let spec = player.render();

        assert_eq!(spec.component_name, test_constants().native_view_name);
        assert_eq!(spec.props, view);
        assert_eq!(player.view_props(), &view);
    }

    #[tokio::test]
    async fn start_success_reports_ready_player_once() {
        let h = Harness::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();
        let counter = Arc::clone(&calls);
        let options = h.options().on_player_ready(move |result| {
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = tx.send(result);
        });

        let player = AugmentPlayer::create(h.handle(), options);
        let surface = RecordingSurface::new();
        player.attach_to_surface(&surface).expect("attach");
        assert_eq!(player.state(), PlayerState::AwaitingStart);

        let ready = rx.await.expect("callback fired").expect("player ready");
        assert!(ready.is_ready());
        assert!(player.is_ready());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(surface.mounted(), vec![player.render()]);
        assert_eq!(h.bridge.start_calls(), 1);
    }

    #[tokio::test]
    async fn start_rejection_reports_error_once_without_retry() {
        let h = Harness::new();
        h.bridge
            .script_start(Scripted::Reject(NativeError::new("camera_permission_denied")));
        let (options, rx) = ready_channel(h.options());

        let player = AugmentPlayer::create(h.handle(), options);
        player
            .attach_to_surface(&RecordingSurface::new())
            .expect("attach");

        let err = rx.await.expect("callback fired").expect_err("start failed");
        assert_eq!(err, PlayerError::Native(NativeError::new("camera_permission_denied")));
        assert_eq!(player.state(), PlayerState::Failed);

        tokio::task::yield_now().await;
        assert_eq!(h.bridge.start_calls(), 1);
    }

    #[tokio::test]
    async fn loading_events_flow_before_and_after_readiness() {
        let h = Harness::new();
        let (options, rx) = ready_channel(h.options());
        let player = AugmentPlayer::create(h.handle(), options);

        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": 10 }));
        player
            .attach_to_surface(&RecordingSurface::new())
            .expect("attach");
        h.channel.emit(TEST_PROGRESS_EVENT, json!({ "progress": 40 }));
        rx.await.expect("callback fired").expect("ready");
        h.channel.emit(TEST_OVER_EVENT, json!({}));

        assert_eq!(h.statuses().len(), 3);
        assert_eq!(h.statuses()[2], LoadingStatus::complete());
    }

    #[tokio::test(start_paused = true)]
    async fn hung_start_times_out_through_readiness_callback() {
        let h = Harness::new();
        h.bridge.script_start(Scripted::Hang);
        let (options, rx) = ready_channel(
            h.options()
                .with_timeouts(PlayerTimeouts::none().with_start(Duration::from_secs(5))),
        );

        let player = AugmentPlayer::create(h.handle(), options);
        player
            .attach_to_surface(&RecordingSurface::new())
            .expect("attach");

        let err = rx.await.expect("callback fired").expect_err("timed out");
        assert_eq!(
            err,
            PlayerError::Timeout {
                operation: "start",
                after: Duration::from_secs(5)
            }
        );
        assert_eq!(player.state(), PlayerState::Failed);
    }

    #[tokio::test]
    async fn attach_twice_is_rejected() {
        let h = Harness::new();
        let player = AugmentPlayer::create(h.handle(), PlayerOptions::new());
        let surface = RecordingSurface::new();

        player.attach_to_surface(&surface).expect("first attach");
        assert_eq!(
            player.attach_to_surface(&surface),
            Err(PlayerError::AlreadyAttached)
        );
        assert_eq!(surface.mounted().len(), 1);
    }

    #[tokio::test]
    async fn surface_failure_skips_start_handshake() {
        let h = Harness::new();
        let player = AugmentPlayer::create(h.handle(), PlayerOptions::new());
        let mut surface = MockViewSurfacePort::new();
        surface
            .expect_mount_native_view()
            .times(1)
            .returning(|_| Err(NativeError::new("no_surface")));

        let result = player.attach_to_surface(&surface);

        assert_eq!(result, Err(PlayerError::Native(NativeError::new("no_surface"))));
        assert_eq!(player.state(), PlayerState::Constructed);
        tokio::task::yield_now().await;
        assert_eq!(h.bridge.start_calls(), 0);
    }

    #[tokio::test]
    async fn player_can_attach_again_after_surface_failure() {
        let h = Harness::new();
        let player = AugmentPlayer::create(h.handle(), PlayerOptions::new());

        let failing = RecordingSurface::failing(NativeError::new("no_surface"));
        assert!(player.attach_to_surface(&failing).is_err());

        let surface = RecordingSurface::new();
        player.attach_to_surface(&surface).expect("second attach");
        assert_eq!(player.state(), PlayerState::AwaitingStart);
        assert_eq!(surface.mounted().len(), 1);
    }

    #[tokio::test]
    async fn attach_during_mount_is_rejected() {
        let h = Harness::new();
        let player = AugmentPlayer::create(h.handle(), PlayerOptions::new());
        let nested: Arc<Mutex<Vec<Result<(), PlayerError>>>> = Arc::default();

        let mut surface = MockViewSurfacePort::new();
        let inner_player = player.clone();
        let sink = Arc::clone(&nested);
        surface
            .expect_mount_native_view()
            .times(1)
            .returning(move |_| {
                let result = inner_player.attach_to_surface(&RecordingSurface::new());
                sink.lock().expect("lock").push(result);
                Ok(())
            });

        player.attach_to_surface(&surface).expect("outer attach");

        assert_eq!(
            nested.lock().expect("lock").clone(),
            vec![Err(PlayerError::AlreadyAttached)]
        );
        tokio::task::yield_now().await;
        assert_eq!(h.bridge.start_calls(), 1);
    }

    #[test]
    fn attach_outside_runtime_reports_no_runtime() {
        let h = Harness::new();
        let player = AugmentPlayer::create(h.handle(), PlayerOptions::new());

        assert_eq!(
            player.attach_to_surface(&RecordingSurface::new()),
            Err(PlayerError::NoRuntime)
        );
        assert_eq!(player.state(), PlayerState::Constructed);
    }

    #[tokio::test]
    async fn recenter_failure_is_swallowed() {
        let h = Harness::new();
        let player = ready_player(&h).await;
        h.bridge
            .script_recenter(Scripted::Reject(NativeError::new("nothing_to_recenter")));

        let task = player.recenter_products().expect("ready player accepts recenter");
        task.await.expect("recenter task completed");

        assert_eq!(
            h.bridge.sent_commands(),
            vec![SentCommand::Start, SentCommand::RecenterProducts]
        );
        assert!(player.is_ready());
    }

    #[tokio::test]
    async fn add_product_passes_native_outcome_through() {
        let h = Harness::new();
        let player = ready_player(&h).await;

        let echoed = player.add_product(sample_product()).await;
        assert_eq!(echoed, Ok(sample_product().into_value()));

        let rejection = NativeError::new("product_not_found").with_message("unknown EAN");
        h.bridge
            .script_add_product(Scripted::Reject(rejection.clone()));
        let err = player
            .add_product(sample_product())
            .await
            .expect_err("native rejected");
        assert_eq!(err.native(), Some(&rejection));
    }

    #[tokio::test(start_paused = true)]
    async fn add_product_honours_command_timeout() {
        let h = Harness::new();
        let (options, rx) = ready_channel(
            h.options()
                .with_timeouts(PlayerTimeouts::none().with_command(Duration::from_millis(750))),
        );
        let player = AugmentPlayer::create(h.handle(), options);
        player
            .attach_to_surface(&RecordingSurface::new())
            .expect("attach");
        rx.await.expect("callback fired").expect("ready");

        h.bridge.script_add_product(Scripted::Hang);
        let err = player
            .add_product(sample_product())
            .await
            .expect_err("timed out");
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn commands_before_ready_never_reach_the_bridge() {
        let channel = EventChannel::new();
        let mut bridge = MockNativeBridgePort::new();
        bridge.expect_constants().returning(test_constants);
        bridge.expect_start().never();
        bridge.expect_recenter_products().never();
        bridge.expect_add_product_to_augment_player().never();

        let handle = NativeBridgeHandle::new(Arc::new(bridge), Arc::new(channel));
        let player = AugmentPlayer::create(handle, PlayerOptions::new());

        assert_eq!(
            player.recenter_products().map(|_| ()),
            Err(PlayerError::NotReady {
                state: PlayerState::Constructed
            })
        );
        assert_eq!(
            player.add_product(sample_product()).await,
            Err(PlayerError::NotReady {
                state: PlayerState::Constructed
            })
        );
    }

    #[tokio::test]
    async fn teardown_disposes_subscriptions_and_silences_callbacks() {
        let h = Harness::new();
        let player = ready_player(&h).await;
        assert_eq!(h.channel.listener_count(TEST_PROGRESS_EVENT), 1);
        assert_eq!(h.channel.listener_count(TEST_OVER_EVENT), 1);

        player.teardown();
        player.teardown();

        assert_eq!(player.state(), PlayerState::Detached);
        assert_eq!(h.channel.listener_count(TEST_PROGRESS_EVENT), 0);
        assert_eq!(h.channel.listener_count(TEST_OVER_EVENT), 0);
        assert_eq!(h.channel.emit(TEST_OVER_EVENT, json!({})), 0);
        assert!(h.statuses().is_empty());
        assert_eq!(
            player.attach_to_surface(&RecordingSurface::new()),
            Err(PlayerError::Detached)
        );
        assert!(matches!(
            player.recenter_products(),
            Err(PlayerError::NotReady {
                state: PlayerState::Detached
            })
        ));
    }

    #[test]
    fn handlers_running_after_teardown_do_not_reach_the_loader() {
        let h = Harness::new();
        let player = AugmentPlayer::create(h.handle(), h.options());
        let inner = Arc::clone(&player.inner);

        player.teardown();
        inner.handle_loading_progress(&json!({ "progress": 60 }));
        inner.handle_loading_over();

        assert!(h.statuses().is_empty());
    }

    #[tokio::test]
    async fn start_outcome_after_teardown_is_discarded() {
        let h = Harness::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let options = PlayerOptions::new().on_player_ready(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let player = AugmentPlayer::create(h.handle(), options);
        player
            .attach_to_surface(&RecordingSurface::new())
            .expect("attach");
        player.teardown();

        // Let the spawned handshake run to completion
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert_eq!(h.bridge.start_calls(), 1);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(player.state(), PlayerState::Detached);
    }

    #[tokio::test]
    async fn dropping_last_handle_unsubscribes() {
        let h = Harness::new();
        h.bridge.script_start(Scripted::Hang);
        let player = AugmentPlayer::create(h.handle(), h.options());
        player
            .attach_to_surface(&RecordingSurface::new())
            .expect("attach");
        assert_eq!(h.channel.listener_count(TEST_PROGRESS_EVENT), 1);

        drop(player);

        assert_eq!(h.channel.listener_count(TEST_PROGRESS_EVENT), 0);
        assert_eq!(h.channel.listener_count(TEST_OVER_EVENT), 0);
    }
}
