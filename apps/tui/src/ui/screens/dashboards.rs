use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use smarterp_core::pages::dashboards::{DashboardsState, EmbedView};
use smarterp_core::pages::Loadable;

pub fn render_dashboards(app: &App, f: &mut Frame<'_>, area: Rect) {
    let state = &app.dashboards;
    let [list_area, embed_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    let [filter_area, table_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(list_area);

    render_filter(state, f, filter_area);
    render_list(state, f, table_area);
    render_embed(state, f, embed_area);
}

fn render_filter(state: &DashboardsState, f: &mut Frame<'_>, area: Rect) {
    let border = if state.filtering {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let text = if state.filter.is_empty() && !state.filtering {
        Span::styled("Press / to filter", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(format!("/{}", state.filter))
    };
    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" Filter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(paragraph, area);
}

fn render_list(state: &DashboardsState, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let message = match &state.dashboards {
        Loadable::NotRequested | Loadable::Loading => Some("Loading dashboards..."),
        Loadable::Loaded(all) if all.is_empty() => Some("No dashboards found."),
        Loadable::Loaded(_) => None,
    };
    if let Some(message) = message {
        let paragraph = Paragraph::new(message)
            .block(block.title(" Dashboards "))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let visible = state.visible();
    let total_rows = visible.len();
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, state.selected);
    let open_id = state.embed.as_ref().map(|embed| embed.id);

    let header = Row::new(vec![Cell::from("ID"), Cell::from("Title")]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(i, dashboard)| {
            let style = if i == state.selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if open_id == Some(dashboard.id) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(dashboard.id.to_string()),
                Cell::from(dashboard.dashboard_title.clone()),
            ])
            .style(style)
        });

    let title = if total_rows == 0 {
        " Dashboards (no matches) ".to_string()
    } else {
        format!(" Dashboards ({} of {total_rows}) ", state.selected + 1)
    };

    let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(10)])
        .header(header)
        .block(block.title(title))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_embed(state: &DashboardsState, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default().title(" Dashboard ").borders(Borders::ALL);

    let lines = match state.embed_view() {
        None => vec![TextLine::from(Span::styled(
            "Select a dashboard and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(EmbedView::Loading) => vec![TextLine::from("Loading dashboard...")],
        Some(EmbedView::NotFound) => vec![TextLine::from(Span::styled(
            "Dashboard not found",
            Style::default().fg(Color::Red),
        ))],
        Some(EmbedView::Ready { title, url }) => vec![
            TextLine::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            TextLine::from(""),
            TextLine::from(Span::styled(
                url,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            TextLine::from(""),
            TextLine::from(Span::styled(
                "o: open in browser   Esc: close",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
