//! Owner task for the creation flow.
//!
//! User input and every collaborator callback go through one bounded queue
//! and are applied by a single task, so `CreationState` is never touched
//! concurrently and needs no lock. Collaborator calls run as detached tasks
//! that report back through the same queue.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::config::Defaults;
use crate::model::CreateItemCommand;
use crate::services::{Camera, ItemRepository, ProductLookup};
use crate::ui::events::{AppEvent, RuntimeError};
use crate::ui::items::create::{
    CreateItemEffect, CreateItemIntent, CreateItemStore, CreationState, DispatchOutcome,
    SurfaceId,
};
use crate::ui::mvi::EffectChannel;
use crate::ui::navigation::{MainEffect, Route};

pub struct Runtime<R, L, C> {
    store: CreateItemStore,
    navigation: EffectChannel<MainEffect>,
    after_create: Route,
    repository: Arc<R>,
    lookup: Arc<L>,
    camera: Arc<C>,
    // Weak so the queue closes once every handle and in-flight task is gone.
    events: mpsc::WeakSender<AppEvent>,
    rx: mpsc::Receiver<AppEvent>,
    snapshots: watch::Sender<Option<CreationState>>,
}

/// Host-side handle: sends events, attaches effect observers, watches state.
#[derive(Clone)]
pub struct RuntimeHandle {
    events: mpsc::Sender<AppEvent>,
    navigation: EffectChannel<MainEffect>,
    create_effects: EffectChannel<CreateItemEffect>,
    snapshots: watch::Receiver<Option<CreationState>>,
}

impl<R, L, C> Runtime<R, L, C>
where
    R: ItemRepository,
    L: ProductLookup,
    C: Camera,
{
    pub fn new(
        defaults: &Defaults,
        repository: Arc<R>,
        lookup: Arc<L>,
        camera: Arc<C>,
    ) -> (Self, RuntimeHandle) {
        let (tx, rx) = mpsc::channel(defaults.event_queue_capacity.max(1));
        let (snapshots, snapshot_rx) = watch::channel(None);
        let navigation = EffectChannel::new();
        let create_effects = EffectChannel::new();

        let runtime = Self {
            store: CreateItemStore::new(create_effects.clone()),
            navigation: navigation.clone(),
            after_create: defaults.start_route.clone(),
            repository,
            lookup,
            camera,
            events: tx.downgrade(),
            rx,
            snapshots,
        };
        let handle = RuntimeHandle {
            events: tx,
            navigation,
            create_effects,
            snapshots: snapshot_rx,
        };
        (runtime, handle)
    }

    /// Apply events until `Shutdown` or until the queue closes.
    pub async fn run(mut self) {
        tracing::debug!("creation runtime started");
        while let Some(event) = self.rx.recv().await {
            if matches!(event, AppEvent::Shutdown) {
                break;
            }
            self.handle(event);
        }
        tracing::debug!("creation runtime stopped");
    }

    fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::OpenCreateSurface => {
                self.store.open();
                self.publish();
            }
            AppEvent::DismissCreateSurface => {
                self.store.dismiss();
                self.publish();
            }
            AppEvent::Input { intent, reply } => {
                let outcome = self.apply_input(intent);
                self.publish();
                if let Some(reply) = reply {
                    let _ = reply.send(outcome);
                }
            }
            AppEvent::Callback { surface, intent } => {
                self.apply(surface, intent);
                self.publish();
            }
            AppEvent::LookupRequested { code, done } => self.request_lookup(code, done),
            AppEvent::CameraRequested { done } => self.request_capture(done),
            AppEvent::Shutdown => {}
        }
    }

    fn apply_input(&mut self, intent: CreateItemIntent) -> DispatchOutcome {
        if matches!(intent, CreateItemIntent::SubmissionCompleted { .. }) {
            tracing::warn!("submission result is only accepted from the item repository");
            return DispatchOutcome::Stale;
        }
        let Some(surface) = self.store.surface() else {
            tracing::debug!("input with no open creation surface");
            return DispatchOutcome::Stale;
        };
        self.apply(surface, intent)
    }

    fn apply(&mut self, surface: SurfaceId, intent: CreateItemIntent) -> DispatchOutcome {
        let outcome = self.store.dispatch(surface, intent);
        match &outcome {
            DispatchOutcome::Submit(command) => self.submit(surface, command.clone()),
            DispatchOutcome::Completed { ok: true } => {
                self.navigation.emit(MainEffect::Navigate {
                    route: self.after_create.clone(),
                });
            }
            _ => {}
        }
        outcome
    }

    fn publish(&self) {
        let next = self.store.state().cloned();
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn submit(&self, surface: SurfaceId, command: CreateItemCommand) {
        let Some(events) = self.events.upgrade() else {
            return;
        };
        let repository = Arc::clone(&self.repository);
        tokio::spawn(async move {
            let ok = match repository.create(command).await {
                Ok(item) => {
                    tracing::debug!(surface = %surface, item = %item.id, "item stored");
                    true
                }
                Err(err) => {
                    tracing::warn!(
                        surface = %surface,
                        error = %err,
                        "item repository rejected create"
                    );
                    false
                }
            };
            let completed = AppEvent::Callback {
                surface,
                intent: CreateItemIntent::SubmissionCompleted { ok },
            };
            if events.send(completed).await.is_err() {
                tracing::trace!("submission result dropped (runtime gone)");
            }
        });
    }

    fn request_lookup(&self, code: String, done: Option<oneshot::Sender<()>>) {
        let Some(surface) = self.store.surface() else {
            tracing::debug!(%code, "lookup with no open creation surface");
            return;
        };
        let Some(events) = self.events.upgrade() else {
            return;
        };
        let lookup = Arc::clone(&self.lookup);
        tokio::spawn(async move {
            match lookup.lookup(code.clone()).await {
                Ok(Some(info)) => {
                    let hint = AppEvent::Callback {
                        surface,
                        intent: CreateItemIntent::ProductInfoArrived(info),
                    };
                    if events.send(hint).await.is_err() {
                        tracing::trace!("product hint dropped (runtime gone)");
                    }
                }
                Ok(None) => tracing::debug!(%code, "no product for code"),
                Err(err) => tracing::warn!(%code, error = %err, "product lookup failed"),
            }
            if let Some(done) = done {
                let _ = done.send(());
            }
        });
    }

    fn request_capture(&self, done: Option<oneshot::Sender<()>>) {
        let Some(surface) = self.store.surface() else {
            tracing::debug!("camera requested with no open creation surface");
            return;
        };
        if !self.store.state().is_some_and(CreationState::can_launch_camera) {
            tracing::debug!(surface = %surface, "camera unavailable for current draft");
            return;
        }
        let Some(events) = self.events.upgrade() else {
            return;
        };
        let camera = Arc::clone(&self.camera);
        tokio::spawn(async move {
            match camera.capture().await {
                Some(image) => {
                    let captured = AppEvent::Callback {
                        surface,
                        intent: CreateItemIntent::ImageCaptured(image),
                    };
                    if events.send(captured).await.is_err() {
                        tracing::trace!("captured image dropped (runtime gone)");
                    }
                }
                None => tracing::debug!(surface = %surface, "capture cancelled"),
            }
            if let Some(done) = done {
                let _ = done.send(());
            }
        });
    }
}

impl RuntimeHandle {
    pub async fn send(&self, event: AppEvent) -> Result<(), RuntimeError> {
        self.events
            .send(event)
            .await
            .map_err(|_| RuntimeError::Closed)
    }

    /// Queue without waiting for capacity.
    pub fn try_send(&self, event: AppEvent) -> Result<(), RuntimeError> {
        self.events.try_send(event).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => RuntimeError::Full,
            mpsc::error::TrySendError::Closed(_) => RuntimeError::Closed,
        })
    }

    /// Queue user input and wait for the owner task to apply it.
    pub async fn dispatch(
        &self,
        intent: CreateItemIntent,
    ) -> Result<DispatchOutcome, RuntimeError> {
        let (reply, outcome) = oneshot::channel();
        self.send(AppEvent::Input {
            intent,
            reply: Some(reply),
        })
        .await?;
        outcome.await.map_err(|_| RuntimeError::Closed)
    }

    /// Request a product lookup and wait until its hint, if any, is queued.
    pub async fn lookup(&self, code: impl Into<String>) -> Result<(), RuntimeError> {
        let (done, finished) = oneshot::channel();
        self.send(AppEvent::LookupRequested {
            code: code.into(),
            done: Some(done),
        })
        .await?;
        // A dropped sender means the request was refused; either way it is over.
        let _ = finished.await;
        Ok(())
    }

    /// Request a photo and wait until it, if any, is queued.
    pub async fn capture(&self) -> Result<(), RuntimeError> {
        let (done, finished) = oneshot::channel();
        self.send(AppEvent::CameraRequested { done: Some(done) }).await?;
        let _ = finished.await;
        Ok(())
    }

    pub fn navigation(&self) -> &EffectChannel<MainEffect> {
        &self.navigation
    }

    pub fn create_effects(&self) -> &EffectChannel<CreateItemEffect> {
        &self.create_effects
    }

    /// Watch the open surface's state. `None` while no surface is open.
    pub fn subscribe_state(&self) -> watch::Receiver<Option<CreationState>> {
        self.snapshots.clone()
    }
}
