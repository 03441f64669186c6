//! Page components
//!
//! A component renders from read-only props and turns input into actions:
//! 1. `Props<'a>` carry everything needed to render (borrowed from state)
//! 2. `handle_event` returns actions, never mutates app state
//! 3. `render` is a pure function of props

pub mod help_bar;
pub mod hero_table;
pub mod heroes_page;
pub mod loading_overlay;
pub mod monkey_panel;
pub mod status_bar;

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::event::EventKind;

pub use help_bar::{HelpBar, HelpBarProps};
pub use hero_table::{HeroTable, HeroTableProps};
pub use heroes_page::{HeroesPage, HeroesPageProps};
pub use loading_overlay::{LoadingOverlay, LoadingOverlayProps, SPINNERS};
pub use monkey_panel::{MonkeyPanel, MonkeyPanelProps};
pub use status_bar::{StatusBar, StatusBarProps};

pub trait Component {
    /// Read-only data required to render
    type Props<'a>;

    /// Map an input event to actions
    ///
    /// Render-only components keep the default, which emits nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
