//! Spinner box drawn over the hero table while a fetch is in flight
//!
//! Only the box itself is cleared, so stale rows stay visible around it.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::Component;

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

const WIDTH: u16 = 16;
const HEIGHT: u16 = 3;

pub struct LoadingOverlay;

pub struct LoadingOverlayProps {
    pub tick_count: u32,
}

impl LoadingOverlay {
    /// Centered box inside `area`, shrunk to fit small terminals
    pub fn overlay_area(area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [cell] = Layout::horizontal([Constraint::Length(WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);
        cell
    }
}

impl Component for LoadingOverlay {
    type Props<'a> = LoadingOverlayProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let spinner = SPINNERS[(props.tick_count as usize / 2) % SPINNERS.len()];
        let area = Self::overlay_area(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let line = Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Cyan).bold()),
            Span::styled(" Loading", Style::default().fg(Color::Gray)),
        ])
        .centered();

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
