use crate::app::App;
use crate::ui::widgets::form::spinner_frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use smarterp_core::ModelChoice;

pub fn render_settings(app: &App, f: &mut Frame<'_>, area: Rect) {
    let state = &app.settings;

    let mut lines = vec![
        TextLine::from(Span::styled(
            "Preferred model",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];

    for model in ModelChoice::ALL {
        let selected = model == state.model;
        let marker = if selected { "(•)" } else { "( )" };
        let saved = if state.saved == Some(model) {
            "  saved"
        } else {
            ""
        };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(TextLine::from(vec![
            Span::styled(format!("  {marker} {}", model.label()), style),
            Span::styled(saved, Style::default().fg(Color::Green)),
        ]));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![
        Span::styled("User ID: ", Style::default().fg(Color::Gray)),
        Span::raw(app.config.user_id.to_string()),
    ]));
    lines.push(TextLine::from(vec![
        Span::styled("API: ", Style::default().fg(Color::Gray)),
        Span::raw(app.config.api_base_url.as_str()),
    ]));
    lines.push(TextLine::from(vec![
        Span::styled("Dashboard API: ", Style::default().fg(Color::Gray)),
        Span::raw(app.config.superset_api_url.as_str()),
    ]));

    if state.phase.is_loading() {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            format!("{} Saving...", spinner_frame(app.animation_counter)),
            Style::default().fg(Color::Cyan),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}
