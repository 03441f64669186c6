//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use heroes_core::{Hero, HeroesState};

/// Spinner frame interval
pub const LOADING_ANIM_TICK_MS: u64 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// The hero slice (list, loading flag, error, monkey)
    pub heroes: HeroesState,

    /// Selected table row; always within `heroes.data` when it is non-empty
    pub selected: usize,

    /// Id of the latest fetch request; results tagged with another id are stale
    pub fetch_seq: u64,

    /// Animation frame counter
    pub tick_count: u32,

    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(heroes: HeroesState) -> Self {
        Self {
            heroes,
            selected: 0,
            fetch_seq: 0,
            tick_count: 0,
            terminal_size: (80, 24),
        }
    }

    pub fn selected_hero(&self) -> Option<&Hero> {
        self.heroes.data.get(self.selected)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HeroesState::default())
    }
}
