use crate::app::App;
use crate::ui::widgets::form::{render_prompt_form, FORM_HEIGHT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use smarterp_core::pages::explainer::{ExplainerState, ExplanationRecord};

pub fn render_explainer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let state = &app.explainer;
    let [form_area, history_area] =
        Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)]).areas(area);

    render_prompt_form(
        f,
        form_area,
        "Ask about your data",
        &state.form,
        state.phase,
        "Analyzing...",
        app.animation_counter,
    );

    let block = Block::default()
        .title(format!(" Explanation History ({}) ", state.history.len()))
        .borders(Borders::ALL);

    if state.history.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No explanations yet.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(empty, history_area);
        return;
    }

    let (lines, selected_line) = history_lines(state);
    let visible = history_area.height.saturating_sub(2);
    let scroll = u16::try_from(selected_line)
        .unwrap_or(u16::MAX)
        .saturating_sub(visible.saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, history_area);
}

/// All history lines plus the index of the selected entry's header line.
fn history_lines(state: &ExplainerState) -> (Vec<TextLine<'_>>, usize) {
    let mut lines = Vec::new();
    let mut selected_line = 0;

    for (index, record) in state.history.iter().enumerate() {
        let selected = index == state.selected;
        if selected {
            selected_line = lines.len();
        }
        let expanded = state.is_expanded(record.id);
        lines.push(header_line(record, selected, expanded));
        if expanded {
            push_body(&mut lines, record);
        }
    }

    (lines, selected_line)
}

fn header_line(record: &ExplanationRecord, selected: bool, expanded: bool) -> TextLine<'_> {
    let marker = if expanded { "▼" } else { "▶" };
    let style = if selected {
        Style::default()
            .bg(Color::Rgb(0, 0, 238))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    TextLine::from(vec![
        Span::styled(format!("{marker} {}", record.question), style),
        Span::styled(
            format!("  {}", record.timestamp),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn push_body<'a>(lines: &mut Vec<TextLine<'a>>, record: &'a ExplanationRecord) {
    lines.push(TextLine::from(Span::styled(
        "  Answer:",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        record
            .answer
            .lines()
            .map(|line| TextLine::from(format!("    {line}"))),
    );
    if !record.insights.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "  Key Insights:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            record
                .insights
                .iter()
                .map(|insight| TextLine::from(format!("    • {insight}"))),
        );
    }
    lines.push(TextLine::from(""));
}
