//! Reducer trait for the panel's MVI loop.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// No I/O here: network calls are issued by the caller after the
    /// transition, based on the returned state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
