use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use smarterp_core::pages::PromptForm;
use smarterp_core::{ModelChoice, Phase};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Height of the area [`render_prompt_form`] needs.
pub const FORM_HEIGHT: u16 = 6;

pub fn spinner_frame(animation_counter: f64) -> &'static str {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (animation_counter * 4.0) as usize % SPINNER.len();
    SPINNER[index]
}

fn cursor_char(animation_counter: f64) -> &'static str {
    if (animation_counter * 2.0).sin() > 0.0 {
        "█"
    } else {
        " "
    }
}

pub fn model_selector_line(selected: ModelChoice) -> TextLine<'static> {
    let mut spans = vec![Span::styled("Model: ", Style::default().fg(Color::Gray))];
    for model in ModelChoice::ALL {
        let style = if model == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", model.label()), style));
        spans.push(Span::raw(" "));
    }
    TextLine::from(spans)
}

/// Prompt input, model selector and in-flight indicator of a page form.
pub fn render_prompt_form(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    form: &PromptForm,
    phase: Phase,
    busy_label: &str,
    animation_counter: f64,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [input_area, model_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let cursor = if phase.is_loading() {
        ""
    } else {
        cursor_char(animation_counter)
    };
    let input = Paragraph::new(TextLine::from(Span::styled(
        format!("> {}{cursor}", form.input),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: false });
    f.render_widget(input, input_area);

    f.render_widget(Paragraph::new(model_selector_line(form.model)), model_area);

    if phase.is_loading() {
        let status = TextLine::from(Span::styled(
            format!("{} {busy_label}", spinner_frame(animation_counter)),
            Style::default().fg(Color::Cyan),
        ));
        f.render_widget(Paragraph::new(status), status_area);
    }
}
