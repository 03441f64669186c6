//! App reducer - delegates hero actions to the slice and handles UI state
//!
//! - Hero actions go to `heroes_core::reducer`
//! - A fetch request bumps `fetch_seq` and declares `Effect::FetchHeroes`
//! - Fetch results from any request but the latest are dropped
//! - Every other action leaves the hero slice untouched

use heroes_core::{DispatchResult, HeroesAction};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Hero slice =====
        Action::Heroes(HeroesAction::FetchRequest) => {
            heroes_core::reducer(&mut state.heroes, HeroesAction::FetchRequest);
            state.fetch_seq = state.fetch_seq.wrapping_add(1);
            DispatchResult::changed_with(Effect::FetchHeroes {
                seq: state.fetch_seq,
            })
        }

        Action::HeroesFetched { seq, result } if seq == state.fetch_seq => {
            apply_heroes(state, result)
        }

        Action::HeroesFetched { seq, result } => {
            tracing::debug!(
                seq,
                latest = state.fetch_seq,
                action = %heroes_core::Action::name(&result),
                "Dropping stale fetch result"
            );
            DispatchResult::unchanged()
        }

        Action::Heroes(action) => apply_heroes(state, action),

        // ===== UI actions =====
        Action::UiSelectNext => {
            if state.selected + 1 < state.heroes.data.len() {
                state.selected += 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::UiSelectPrev => {
            if state.selected > 0 {
                state.selected -= 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only the spinner animates
            DispatchResult::from_changed(state.heroes.loading)
        }

        // handled by the runtime
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn apply_heroes(state: &mut AppState, action: HeroesAction) -> DispatchResult<Effect> {
    let changed = heroes_core::reducer(&mut state.heroes, action);
    clamp_selection(state);
    DispatchResult::from_changed(changed)
}

fn clamp_selection(state: &mut AppState) {
    let len = state.heroes.data.len();
    if state.selected >= len {
        state.selected = len.saturating_sub(1);
    }
}
