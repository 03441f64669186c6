use heroes_core::Hero;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

use super::Component;

pub const COLUMNS: [&str; 3] = ["Hero", "Pro Picks/Bans*", "Pro Wins*"];
pub const LOADING_ROW: &str = "Loading...";

pub struct HeroTable;

pub struct HeroTableProps<'a> {
    pub heroes: &'a [Hero],
    pub loading: bool,
    pub selected: usize,
}

impl Component for HeroTable {
    type Props<'a> = HeroTableProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let header = Row::new(COLUMNS)
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = if props.loading && props.heroes.is_empty() {
            vec![Row::new([Cell::from(
                Line::from(LOADING_ROW).centered().fg(Color::DarkGray),
            )])]
        } else {
            props.heroes.iter().map(hero_row).collect()
        };

        let widths = [
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Length(10),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .row_highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)).bold())
            .highlight_symbol("> ");

        let mut table_state = TableState::default();
        if !props.heroes.is_empty() {
            table_state.select(Some(props.selected));
        }
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

fn hero_row(hero: &Hero) -> Row<'static> {
    Row::new([
        Cell::from(hero.localized_name.clone()).fg(Color::Rgb(120, 200, 255)),
        Cell::from(format!("{} / {}", hero.picks(), hero.bans())),
        Cell::from(hero.wins().to_string()),
    ])
}
