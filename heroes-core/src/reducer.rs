//! Reducer - how the heroes slice changes
//!
//! - `reducer(&mut state, action) -> bool` is what a [`Store`](crate::Store)
//!   calls; it returns `true` when a re-render is needed
//! - `reduce(&state, action) -> state` is the pure value form
//!
//! Output depends only on the previous state and the action.

use crate::actions::HeroesAction;
use crate::state::HeroesState;

/// Apply a heroes action in place
///
/// Every heroes action changes the slice, so this always returns `true`.
pub fn reducer(state: &mut HeroesState, action: HeroesAction) -> bool {
    match action {
        HeroesAction::FetchRequest => {
            // Stale data and errors stay visible while loading
            state.loading = true;
            true
        }

        HeroesAction::FetchSuccess(heroes) => {
            state.loading = false;
            state.data = heroes;
            true
        }

        HeroesAction::FetchError(message) => {
            state.loading = false;
            state.errors = Some(message);
            true
        }

        HeroesAction::ChangeBanana => {
            state.monkey.banana.is_rotten = !state.monkey.banana.is_rotten;
            true
        }

        HeroesAction::ChangeMood => {
            state.monkey.happy = !state.monkey.happy;
            true
        }
    }
}

/// Compute the next state without touching `state`
pub fn reduce(state: &HeroesState, action: HeroesAction) -> HeroesState {
    let mut next = state.clone();
    reducer(&mut next, action);
    next
}
