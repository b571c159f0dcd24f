//! Owner of the live creation draft.
//!
//! The store is driven from a single task. It runs the pure reducer and
//! performs the side effects around it: it hands out the create command on
//! an accepted submit, emits the dismissal effect on success, and drops
//! callbacks aimed at a surface that is no longer open.

use std::fmt;

use crate::model::CreateItemCommand;
use crate::ui::mvi::{Effect, EffectChannel, Reducer};

use super::intent::CreateItemIntent;
use super::reducer::CreateItemReducer;
use super::state::CreationState;

/// Run the reducer over a store field in place.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Identity of one opened creation surface.
///
/// Collaborator callbacks carry the id of the surface that requested them,
/// so a result that outlives its surface can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Effects from the creation surface to its presentation host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateItemEffect {
    /// Item was created; close the sheet.
    Dismiss,
}

impl Effect for CreateItemEffect {}

/// What a dispatch did, for the caller to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Draft changed.
    Applied,
    /// Intent was valid for this surface but left the draft as it was.
    Unchanged,
    /// Submit accepted. The caller must pass the command to the repository
    /// and report back with `SubmissionCompleted`.
    Submit(CreateItemCommand),
    /// A submission finished.
    Completed { ok: bool },
    /// Target surface is gone, or the completion matched no submission.
    Stale,
}

struct LiveSurface {
    id: SurfaceId,
    state: CreationState,
}

pub struct CreateItemStore {
    live: Option<LiveSurface>,
    next_id: u64,
    effects: EffectChannel<CreateItemEffect>,
}

impl CreateItemStore {
    pub fn new(effects: EffectChannel<CreateItemEffect>) -> Self {
        Self {
            live: None,
            next_id: 0,
            effects,
        }
    }

    /// Open a fresh, empty surface. Any surface still open is discarded.
    pub fn open(&mut self) -> SurfaceId {
        self.next_id += 1;
        let id = SurfaceId(self.next_id);
        if let Some(previous) = self.live.replace(LiveSurface {
            id,
            state: CreationState::default(),
        }) {
            tracing::debug!(surface = %previous.id, "creation surface replaced");
        }
        tracing::debug!(surface = %id, "creation surface opened");
        id
    }

    /// Discard the open surface, if any.
    ///
    /// An in-flight submission is not cancelled; its completion will arrive
    /// as stale.
    pub fn dismiss(&mut self) -> Option<SurfaceId> {
        let surface = self.live.take()?;
        if surface.state.is_submitting {
            tracing::debug!(surface = %surface.id, "dismissed with submission in flight");
        } else {
            tracing::debug!(surface = %surface.id, "creation surface dismissed");
        }
        Some(surface.id)
    }

    pub fn surface(&self) -> Option<SurfaceId> {
        self.live.as_ref().map(|live| live.id)
    }

    pub fn is_live(&self, surface: SurfaceId) -> bool {
        self.surface() == Some(surface)
    }

    pub fn state(&self) -> Option<&CreationState> {
        self.live.as_ref().map(|live| &live.state)
    }

    pub fn effects(&self) -> &EffectChannel<CreateItemEffect> {
        &self.effects
    }

    pub fn dispatch(&mut self, surface: SurfaceId, intent: CreateItemIntent) -> DispatchOutcome {
        let Some(live) = self.live.as_mut().filter(|live| live.id == surface) else {
            tracing::debug!(surface = %surface, "callback for closed surface discarded");
            return DispatchOutcome::Stale;
        };

        let completed = match &intent {
            CreateItemIntent::SubmissionCompleted { ok } => Some(*ok),
            _ => None,
        };
        if completed.is_some() && !live.state.is_submitting {
            tracing::debug!(surface = %surface, "completion without submission in flight");
            return DispatchOutcome::Stale;
        }

        let command = match &intent {
            CreateItemIntent::SubmitRequested => live.state.submission(),
            _ => None,
        };

        let before = live.state.clone();
        dispatch_mvi!(live, state, CreateItemReducer, intent);

        if let Some(ok) = completed {
            if ok {
                tracing::info!(surface = %surface, "item created");
                self.effects.emit(CreateItemEffect::Dismiss);
            } else {
                tracing::warn!(surface = %surface, "item creation failed, draft kept for retry");
            }
            return DispatchOutcome::Completed { ok };
        }

        if let Some(command) = command {
            tracing::info!(
                surface = %surface,
                name = %command.name,
                category = command.category.key(),
                has_image = command.image.is_some(),
                "create item command issued"
            );
            return DispatchOutcome::Submit(command);
        }

        if live.state == before {
            tracing::debug!(
                surface = %surface,
                submitting = live.state.is_submitting,
                "intent left draft unchanged"
            );
            DispatchOutcome::Unchanged
        } else {
            DispatchOutcome::Applied
        }
    }
}
