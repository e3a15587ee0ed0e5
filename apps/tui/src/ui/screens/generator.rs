use crate::app::App;
use crate::ui::widgets::form::{render_prompt_form, FORM_HEIGHT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_generator(app: &App, f: &mut Frame<'_>, area: Rect) {
    let [form_area, link_area] =
        Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)]).areas(area);

    render_prompt_form(
        f,
        form_area,
        "Describe a dashboard",
        &app.generator.form,
        app.generator.phase,
        "Creating dashboard...",
        app.animation_counter,
    );

    let lines = app.generator.dashboard_url.as_deref().map_or_else(
        || {
            vec![TextLine::from(Span::styled(
                "The link to the new dashboard appears here.",
                Style::default().fg(Color::DarkGray),
            ))]
        },
        link_lines,
    );

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Dashboard ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, link_area);
}

/// The link line shared by both dashboard generation pages.
pub fn link_lines(url: &str) -> Vec<TextLine<'_>> {
    vec![
        TextLine::from(Span::styled(
            "View Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            url,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
        TextLine::from(Span::styled(
            "F2: open in browser",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
