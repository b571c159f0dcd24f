//! "Add item" surface.
//!
//! Merges typed fields, an optional product-lookup hint and an optional
//! camera photo into one validated create command.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Creation draft
//! - `intent.rs` - User input and collaborator callbacks
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `store.rs` - Surface ownership, commands and effects

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::{CreateItemIntent, FormField};
pub use reducer::CreateItemReducer;
pub use state::CreationState;
pub use store::{CreateItemEffect, CreateItemStore, DispatchOutcome, SurfaceId};
