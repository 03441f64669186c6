//! Root component: the heroes page
//!
//! Layout, top to bottom inside the outer frame:
//! monkey panel, hero table (with the loading overlay on top while a fetch is
//! in flight), footnote, selected hero details, key bindings.

use crossterm::event::{KeyCode, KeyModifiers};
use heroes_core::actions;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{
    Component, HelpBar, HelpBarProps, HeroTable, HeroTableProps, LoadingOverlay,
    LoadingOverlayProps, MonkeyPanel, MonkeyPanelProps, StatusBar, StatusBarProps, SPINNERS,
};
use crate::action::Action;
use crate::event::EventKind;
use crate::state::AppState;

pub const FOOTNOTE: &str = "*in last 30 days";

pub struct HeroesPageProps<'a> {
    pub state: &'a AppState,
    /// API endpoint, used to resolve icon paths
    pub endpoint: &'a str,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct HeroesPage {
    /// Where the monkey panel was last drawn, for click hit-testing
    monkey_area: Rect,
}

impl Component for HeroesPage {
    type Props<'a> = HeroesPageProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key)
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c') =>
            {
                vec![Action::Quit]
            }
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => vec![actions::fetch_request().into()],
                KeyCode::Char('b') => vec![actions::change_banana().into()],
                KeyCode::Char('m') => vec![actions::change_mood().into()],
                KeyCode::Char('j') | KeyCode::Down => vec![Action::UiSelectNext],
                KeyCode::Char('k') | KeyCode::Up => vec![Action::UiSelectPrev],
                KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                _ => vec![],
            },
            EventKind::Scroll { delta, .. } if *delta > 0 => vec![Action::UiSelectNext],
            EventKind::Scroll { delta, .. } if *delta < 0 => vec![Action::UiSelectPrev],
            EventKind::Scroll { .. } => vec![],
            EventKind::Click { column, row } => {
                MonkeyPanel::toggle_at(self.monkey_area, *column, *row)
                    .map(Action::from)
                    .into_iter()
                    .collect()
            }
            EventKind::Resize(width, height) => vec![Action::UiTerminalResize(*width, *height)],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let heroes = &state.heroes;

        let loading_indicator = if heroes.loading {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!("{spinner} ")
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" Heroes {loading_indicator}"))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let [monkey_area, table_area, footnote_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(MonkeyPanel::HEIGHT + 1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.monkey_area = monkey_area;
        MonkeyPanel.render(
            frame,
            monkey_area,
            MonkeyPanelProps {
                monkey: &heroes.monkey,
            },
        );

        HeroTable.render(
            frame,
            table_area,
            HeroTableProps {
                heroes: &heroes.data,
                loading: heroes.loading,
                selected: state.selected,
            },
        );

        if heroes.loading {
            LoadingOverlay.render(
                frame,
                table_area,
                LoadingOverlayProps {
                    tick_count: state.tick_count,
                },
            );
        }

        frame.render_widget(
            Paragraph::new(Line::from(FOOTNOTE).italic().fg(Color::DarkGray)),
            footnote_area,
        );

        StatusBar.render(
            frame,
            status_area,
            StatusBarProps {
                hero: state.selected_hero(),
                endpoint: props.endpoint,
            },
        );

        HelpBar.render(frame, help_area, HelpBarProps);
    }
}
