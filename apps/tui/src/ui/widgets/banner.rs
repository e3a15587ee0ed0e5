use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use smarterp_core::{BannerSlot, Severity};

const fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

pub fn render_banner(banner: &BannerSlot, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default().title(" Status ").borders(Borders::ALL);

    let Some(notice) = banner.current() else {
        f.render_widget(block.border_style(Style::default().fg(Color::DarkGray)), area);
        return;
    };

    let color = severity_color(notice.severity);
    let line = TextLine::from(vec![
        Span::styled(
            format!("{}: ", notice.severity.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(notice.message.as_str(), Style::default().fg(color)),
        Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(block.border_style(Style::default().fg(color)))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
