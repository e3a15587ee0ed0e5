use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use smarterp_core::pages::Loadable;
use smarterp_core::wire::QueryHistoryEntry;

pub fn render_history(app: &App, f: &mut Frame<'_>, area: Rect) {
    let state = &app.history;
    let block = Block::default().borders(Borders::ALL);

    let entries = match &state.entries {
        Loadable::NotRequested | Loadable::Loading => {
            let paragraph = Paragraph::new("Loading query history...")
                .block(block.title(" Query History "))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
            return;
        }
        Loadable::Loaded(entries) if entries.is_empty() => {
            let paragraph = Paragraph::new("No queries recorded yet.")
                .block(block.title(" Query History "))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
            return;
        }
        Loadable::Loaded(entries) => entries,
    };

    let [table_area, sql_area] =
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);

    let max_visible_rows = table_area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(entries.len(), max_visible_rows, state.selected);

    let header = Row::new(vec![
        Cell::from("Prompt"),
        Cell::from("Provider"),
        Cell::from("Time"),
        Cell::from("Created"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, entry)| {
            let style = if i == state.selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            history_row(entry).style(style)
        });

    let widths = [
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(format!(
            " Query History ({} of {}) ",
            state.selected + 1,
            entries.len()
        )))
        .column_spacing(1);
    f.render_widget(table, table_area);

    let sql = state
        .selected_entry()
        .and_then(|entry| entry.generated_sql.as_deref())
        .unwrap_or("");
    let paragraph = Paragraph::new(sql)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().title(" SQL ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, sql_area);
}

fn history_row(entry: &QueryHistoryEntry) -> Row<'_> {
    Row::new(vec![
        Cell::from(entry.natural_language_query.as_deref().unwrap_or("-")),
        Cell::from(entry.llm_provider.as_deref().unwrap_or("-")),
        Cell::from(
            entry
                .execution_time_ms
                .map_or_else(|| "-".to_string(), |ms| format!("{ms} ms")),
        ),
        Cell::from(entry.created_at.as_deref().unwrap_or("-")),
    ])
}
