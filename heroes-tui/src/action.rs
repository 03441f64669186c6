//! App actions
//!
//! Naming convention:
//! - `Heroes(..)` wraps the hero slice actions (fetch intent/results, toggles)
//! - `Ui*` prefix for view-only state (selection, terminal size)
//! - `Tick` / `Quit` are global

use heroes_core::{ActionSummary, HeroesAction};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Anything the hero slice understands
    Heroes(HeroesAction),

    /// Outcome of the fetch started by request `seq`
    HeroesFetched { seq: u64, result: HeroesAction },

    /// Move the table selection one row down
    UiSelectNext,

    /// Move the table selection one row up
    UiSelectPrev,

    /// Terminal was resized
    UiTerminalResize(u16, u16),

    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}

impl From<HeroesAction> for Action {
    fn from(action: HeroesAction) -> Self {
        Action::Heroes(action)
    }
}

impl heroes_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Heroes(action) => action.name(),
            Action::HeroesFetched { result, .. } => result.name(),
            Action::UiSelectNext => "UiSelectNext",
            Action::UiSelectPrev => "UiSelectPrev",
            Action::UiTerminalResize(..) => "UiTerminalResize",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}

impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::Heroes(action) => action.summary(),
            Action::HeroesFetched { seq, result } => format!("{} #{seq}", result.summary()),
            _ => format!("{:?}", self),
        }
    }
}
