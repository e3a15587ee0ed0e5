use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn shortcuts_line(keys: &[(&'static str, &'static str)]) -> TextLine<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (i, (key, action)) in keys.iter().enumerate() {
        let separator = if i + 1 == keys.len() { "" } else { "   " };
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(": {action}{separator}"),
            Style::default().fg(Color::Gray),
        ));
    }
    TextLine::from(spans)
}

pub fn render_shortcuts(keys: &[(&'static str, &'static str)], f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(shortcuts_line(keys)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
