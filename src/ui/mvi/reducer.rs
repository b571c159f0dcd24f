//! Reducer trait for the MVI layer.

use super::intent::Intent;
use super::state::UiState;

/// Folds intents into state.
///
/// The reducer is the only place where state transitions happen and it must
/// stay pure: `(State, Intent) -> State`. Commands to collaborators and
/// effects to the host are issued by the owning store around the call.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply a batch of intents in order.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
