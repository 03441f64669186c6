//! The monkey toy widget
//!
//! Rendered on every frame, whatever the fetch state. Keys `b` and `m` on the
//! page toggle the banana and the mood, and so does clicking their lines.

use heroes_core::{actions, HeroesAction, Monkey};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;

pub const HAPPY_FACE: &str = "(^_^)";
pub const SAD_FACE: &str = "(T_T)";

pub struct MonkeyPanel;

pub struct MonkeyPanelProps<'a> {
    pub monkey: &'a Monkey,
}

impl MonkeyPanel {
    pub const HEIGHT: u16 = 3;
    pub const BANANA_LINE: u16 = 1;
    pub const MOOD_LINE: u16 = 2;

    /// Toggle for a click at `column`/`row` on a panel drawn in `area`
    pub fn toggle_at(area: Rect, column: u16, row: u16) -> Option<HeroesAction> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        match row - area.y {
            Self::BANANA_LINE => Some(actions::change_banana()),
            Self::MOOD_LINE => Some(actions::change_mood()),
            _ => None,
        }
    }
}

impl Component for MonkeyPanel {
    type Props<'a> = MonkeyPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let monkey = props.monkey;

        let (face, face_color) = if monkey.happy {
            (HAPPY_FACE, Color::Yellow)
        } else {
            (SAD_FACE, Color::Blue)
        };
        let banana_color = if monkey.banana.is_rotten {
            Color::Rgb(140, 110, 40)
        } else {
            Color::Rgb(250, 220, 80)
        };

        let lines = vec![
            Line::from(Span::styled(face, Style::default().fg(face_color).bold())),
            Line::from(vec![
                Span::raw(format!("{}'s banana is ", monkey.name)),
                Span::styled(monkey.banana.label(), Style::default().fg(banana_color).bold()),
                Span::raw("."),
            ]),
            Line::from(Span::styled(
                format!("{} is {} because of this.", monkey.name, monkey.mood()),
                Style::default().fg(Color::DarkGray).italic(),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}
