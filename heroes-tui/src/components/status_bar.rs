//! Details line for the selected hero: its page route and icon URL

use heroes_core::Hero;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;

pub struct StatusBar;

pub struct StatusBarProps<'a> {
    pub hero: Option<&'a Hero>,
    /// API endpoint the icon path is resolved against
    pub endpoint: &'a str,
}

impl Component for StatusBar {
    type Props<'a> = StatusBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(hero) = props.hero else {
            frame.render_widget(Paragraph::new(""), area);
            return;
        };

        let line = Line::from(vec![
            Span::styled(" → ", Style::default().fg(Color::DarkGray)),
            Span::styled(hero.route(), Style::default().fg(Color::Cyan).underlined()),
            Span::styled("  icon ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                hero.icon_url(props.endpoint),
                Style::default().fg(Color::Gray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RenderHarness;

    #[test]
    fn test_render_route_and_icon() {
        let hero = Hero {
            id: 1,
            name: "npc_dota_hero_antimage".into(),
            localized_name: "Anti-Mage".into(),
            icon: "/apps/dota2/images/heroes/antimage_icon.png".into(),
            pro_pick: None,
            pro_ban: None,
            pro_win: None,
        };

        let mut render = RenderHarness::new(120, 1);
        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            StatusBar.render(
                frame,
                area,
                StatusBarProps {
                    hero: Some(&hero),
                    endpoint: "https://api.opendota.com",
                },
            );
        });

        assert!(output.contains("/heroes/npc_dota_hero_antimage"));
        assert!(output.contains("https://api.opendota.com/apps/dota2/images/heroes/antimage_icon.png"));
    }

    #[test]
    fn test_render_nothing_without_selection() {
        let mut render = RenderHarness::new(40, 1);
        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            StatusBar.render(
                frame,
                area,
                StatusBarProps {
                    hero: None,
                    endpoint: "https://api.opendota.com",
                },
            );
        });

        assert!(output.trim().is_empty());
    }
}
