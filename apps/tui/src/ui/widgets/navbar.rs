use crate::app::state::AppScreen;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

pub fn render_navbar(current: AppScreen, f: &mut Frame<'_>, area: Rect) {
    let titles: Vec<TextLine<'_>> = AppScreen::ALL
        .iter()
        .map(|screen| TextLine::from(screen.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .block(
            Block::default()
                .title(" SmartERP BI ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    f.render_widget(tabs, area);
}
