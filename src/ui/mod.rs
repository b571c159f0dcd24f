//! View-model layer: MVI primitives, the item creation surface, navigation
//! effects and the task that owns them.

pub mod events;
pub mod items;
pub mod mvi;
pub mod navigation;
pub mod runtime;

pub use events::{AppEvent, RuntimeError};
pub use runtime::{Runtime, RuntimeHandle};
