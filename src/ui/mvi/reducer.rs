//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Applies intents to a state.
///
/// All state transitions of a view go through its reducer. `reduce` is a
/// pure function `(State, Intent) -> State`: no I/O, no logging, no clock.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Replay a sequence of intents, oldest first.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
