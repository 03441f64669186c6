//! The heroes slice

use crate::hero::{Hero, Monkey};

/// Everything the heroes page knows
///
/// `data` is replaced wholesale on every successful fetch. `errors` is only
/// written by a failed fetch and is never cleared afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroesState {
    pub data: Vec<Hero>,
    pub loading: bool,
    pub errors: Option<String>,
    pub monkey: Monkey,
}

impl HeroesState {
    /// A fetch is in flight and there is nothing stale to show meanwhile
    pub fn is_loading_empty(&self) -> bool {
        self.loading && self.data.is_empty()
    }
}
