use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn key_line(key: &'static str, action: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<12}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(action),
    ])
}

fn section(title: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "SmartERP BI console",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Generate SQL, build dashboards and ask questions about your data in plain language."),
        TextLine::from(""),
        section("Keyboard Shortcuts:"),
        key_line("Tab/S-Tab", "Next / previous page"),
        key_line("F1", "Toggle this help popup"),
        key_line("F10", "Quit application"),
        key_line("Esc", "Dismiss the status banner"),
        TextLine::from(""),
        section("Forms (SQL, Dashboard, Explain, Generate):"),
        key_line("Enter", "Submit the prompt"),
        key_line("Left/Right", "Choose the model"),
        key_line("F2", "Copy SQL / open link / expand entry"),
        key_line("Up/Down", "Select an explanation"),
        TextLine::from(""),
        section("Dashboards, History, Settings:"),
        key_line("Up/Down", "Move the selection"),
        key_line("Enter", "Show dashboard / save model"),
        key_line("/", "Filter dashboards by title"),
        key_line("o", "Open the dashboard in the browser"),
        key_line("r", "Refresh"),
        key_line("q", "Quit application"),
        TextLine::from(""),
        section("CLI Options:"),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
