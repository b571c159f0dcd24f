//! Model-View-Intent (MVI) primitives.
//!
//! # Architecture
//!
//! ```text
//!            Intent ──→ Reducer ──→ State ──→ View
//!               ↑                     │
//!  collaborators┘                     └──→ Store ──→ Effect ──→ Host
//! ```
//!
//! - **State**: immutable snapshot of a surface
//! - **Intent**: user actions and collaborator callbacks
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **Effect**: one-shot instruction to the host, delivered at most once

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::{Effect, EffectChannel, EffectReceiver};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
