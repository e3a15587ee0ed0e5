use crate::app::App;
use crate::ui::screens::generator::link_lines;
use crate::ui::widgets::form::{render_prompt_form, FORM_HEIGHT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_generate_page(app: &App, f: &mut Frame<'_>, area: Rect) {
    let state = &app.generate_page;
    let [form_area, result_area] =
        Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)]).areas(area);

    render_prompt_form(
        f,
        form_area,
        "Generate Dashboard",
        &state.form,
        state.phase,
        "Generating...",
        app.animation_counter,
    );

    let lines = if let Some(error) = &state.error {
        vec![TextLine::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red),
        ))]
    } else if let Some(url) = &state.dashboard_url {
        link_lines(url)
    } else {
        Vec::new()
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Result ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, result_area);
}
