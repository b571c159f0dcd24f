//! Collaborator doubles for driving the creation runtime in tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use checkmate::config::{CatalogEntry, Defaults};
use checkmate::model::{CreateItemCommand, ImageReference, Item, ItemCategory, ProductInfo};
use checkmate::services::{
    Camera, CatalogLookup, InMemoryItemRepository, ItemRepository, LookupError, ProductLookup,
    RepositoryError,
};
use checkmate::ui::items::create::CreationState;
use checkmate::ui::{Runtime, RuntimeHandle};
use parking_lot::Mutex;
use tokio::sync::{watch, Notify};

pub const PEN_CODE: &str = "4901234567894";

pub fn pen() -> ProductInfo {
    ProductInfo {
        name: "Pen".into(),
        description: "Blue ink".into(),
        category: ItemCategory::StudySupplies,
    }
}

pub fn catalog() -> CatalogLookup {
    CatalogLookup::new(&[CatalogEntry {
        code: PEN_CODE.into(),
        name: "Pen".into(),
        description: "Blue ink".into(),
        category: ItemCategory::StudySupplies,
    }])
}

/// Repository whose writes block until `release` is called.
#[derive(Default)]
pub struct GatedRepository {
    gate: Notify,
    fail: AtomicBool,
    commands: Mutex<Vec<CreateItemCommand>>,
}

impl GatedRepository {
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn commands(&self) -> Vec<CreateItemCommand> {
        self.commands.lock().clone()
    }
}

impl ItemRepository for GatedRepository {
    async fn create(&self, command: CreateItemCommand) -> Result<Item, RepositoryError> {
        self.commands.lock().push(command.clone());
        self.gate.notified().await;
        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable);
        }
        Ok(Item::from_command(command))
    }
}

/// Lookup that never resolves.
pub struct PendingLookup;

impl ProductLookup for PendingLookup {
    async fn lookup(&self, _code: String) -> Result<Option<ProductInfo>, LookupError> {
        std::future::pending().await
    }
}

/// Camera that always returns the same photo.
pub struct StaticCamera(pub ImageReference);

impl Camera for StaticCamera {
    async fn capture(&self) -> Option<ImageReference> {
        Some(self.0.clone())
    }
}

pub fn photo() -> ImageReference {
    ImageReference::new("content://camera/42")
}

/// Spawn a runtime on the current tokio runtime.
pub fn spawn_runtime<R, L, C>(repository: Arc<R>, lookup: L, camera: C) -> RuntimeHandle
where
    R: ItemRepository,
    L: ProductLookup,
    C: Camera,
{
    let (runtime, handle) = Runtime::new(
        &Defaults::default(),
        repository,
        Arc::new(lookup),
        Arc::new(camera),
    );
    tokio::spawn(runtime.run());
    handle
}

pub fn spawn_default() -> (RuntimeHandle, Arc<InMemoryItemRepository>) {
    let repository = Arc::new(InMemoryItemRepository::new());
    let handle = spawn_runtime(Arc::clone(&repository), catalog(), StaticCamera(photo()));
    (handle, repository)
}

/// Wait until the published state satisfies `predicate`.
pub async fn wait_state<F>(
    states: &mut watch::Receiver<Option<CreationState>>,
    predicate: F,
) -> Option<CreationState>
where
    F: FnMut(&Option<CreationState>) -> bool,
{
    let state = tokio::time::timeout(Duration::from_secs(2), states.wait_for(predicate))
        .await
        .expect("state did not settle in time")
        .expect("runtime gone");
    state.clone()
}

pub fn current(states: &watch::Receiver<Option<CreationState>>) -> CreationState {
    states.borrow().clone().expect("no open surface")
}
