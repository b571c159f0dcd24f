use thiserror::Error;
use tokio::sync::oneshot;

use crate::ui::items::create::{CreateItemIntent, DispatchOutcome, SurfaceId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Event queue closed")]
    Closed,
    #[error("Event queue full")]
    Full,
}

/// Everything the owner task reacts to. Events are applied one at a time,
/// in the order they were queued.
#[derive(Debug)]
pub enum AppEvent {
    /// Open a fresh creation surface.
    OpenCreateSurface,
    /// Close the creation surface, discarding its draft.
    DismissCreateSurface,
    /// User input aimed at the open surface.
    Input {
        intent: CreateItemIntent,
        /// Receives what the dispatch did, after the new state is published.
        reply: Option<oneshot::Sender<DispatchOutcome>>,
    },
    /// Collaborator result, tagged with the surface that asked for it.
    Callback {
        surface: SurfaceId,
        intent: CreateItemIntent,
    },
    /// Look up a product code for the open surface.
    LookupRequested {
        code: String,
        /// Completed once any resulting hint has been queued.
        done: Option<oneshot::Sender<()>>,
    },
    /// Launch the camera for the open surface.
    CameraRequested {
        /// Completed once any resulting photo has been queued.
        done: Option<oneshot::Sender<()>>,
    },
    /// Stop the owner task.
    Shutdown,
}

impl AppEvent {
    pub fn input(intent: CreateItemIntent) -> Self {
        AppEvent::Input {
            intent,
            reply: None,
        }
    }
}
