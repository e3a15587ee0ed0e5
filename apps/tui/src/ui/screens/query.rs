use crate::app::App;
use crate::ui::widgets::form::{render_prompt_form, FORM_HEIGHT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use smarterp_core::wire::SqlResponse;
use smarterp_core::ModelChoice;

pub fn render_query(app: &App, f: &mut Frame<'_>, area: Rect) {
    let [form_area, result_area] =
        Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)]).areas(area);

    render_prompt_form(
        f,
        form_area,
        "Ask for SQL",
        &app.query.form,
        app.query.phase,
        "Generating SQL...",
        app.animation_counter,
    );

    let block = Block::default()
        .title(" Generated SQL ")
        .borders(Borders::ALL);

    let text = app.query.result.as_ref().map_or_else(
        || {
            Text::from(Span::styled(
                "Describe the data you need and press Enter.",
                Style::default().fg(Color::DarkGray),
            ))
        },
        sql_text,
    );

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, result_area);
}

fn sql_text(response: &SqlResponse) -> Text<'_> {
    let mut lines: Vec<TextLine<'_>> = response
        .sql
        .lines()
        .map(|line| TextLine::from(Span::styled(line, Style::default().fg(Color::Green))))
        .collect();

    let provider = response.llm_provider.as_deref().map(|provider| {
        ModelChoice::parse(provider).map_or_else(|| provider.to_string(), |m| m.label().to_string())
    });
    let meta = match (response.execution_time_ms, provider) {
        (Some(ms), Some(provider)) => Some(format!("{ms} ms via {provider}")),
        (Some(ms), None) => Some(format!("{ms} ms")),
        (None, Some(provider)) => Some(format!("via {provider}")),
        (None, None) => None,
    };
    if let Some(meta) = meta {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            meta,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(TextLine::from(Span::styled(
        "F2: copy to clipboard",
        Style::default().fg(Color::DarkGray),
    )));

    Text::from(lines)
}
