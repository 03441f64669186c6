use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;

const BINDINGS: [(&str, &str); 5] = [
    ("r", "refresh"),
    ("b", "banana"),
    ("m", "mood"),
    ("j/k", "select"),
    ("q", "quit"),
];

pub struct HelpBar;

pub struct HelpBarProps;

impl Component for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let mut spans = Vec::with_capacity(BINDINGS.len() * 2);
        for (key, label) in BINDINGS {
            spans.push(Span::styled(
                format!(" {key}"),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(
                format!(" {label} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
