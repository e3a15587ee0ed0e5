mod app;
mod clock;
mod fetch;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::event::KeyCode;
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
    Frame, Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use smarterp_core::pages::dashboards::{DashboardsState, EmbedView};
use smarterp_core::pages::generate_page::GeneratePageState;
use smarterp_core::pages::Loadable;
use smarterp_core::{BannerSlot, Effect, ModelChoice, Severity};
use wasm_bindgen_futures::spawn_local;

use app::{WebApp, WebKey, WebTab};
use clock::FrameClock;
use fetch::SupersetFetch;

const SUPERSET_API_URL: &str = match option_env!("SMARTERP_SUPERSET_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};
const DASHBOARD_SERVER_URL: &str = match option_env!("SMARTERP_DASHBOARD_SERVER_URL") {
    Some(url) => url,
    None => "http://localhost:8088/superset",
};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

fn main() -> io::Result<()> {
    let state = Rc::new(RefCell::new(WebApp::new(DASHBOARD_SERVER_URL)));
    let clock = Rc::new(RefCell::new(FrameClock::default()));
    let client = SupersetFetch::new(SUPERSET_API_URL);

    run_effects(&state, &client);

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        let client = client.clone();
        move |event| {
            let Some(key) = web_key(event.code) else {
                return;
            };
            state.borrow_mut().handle_key(key);
            run_effects(&state, &client);
        }
    });

    terminal.draw_web(move |f| {
        let elapsed = clock.borrow_mut().tick(js_sys::Date::now() / 1000.0);
        let spinner = clock.borrow().spinner;
        let mut app = state.borrow_mut();
        app.tick(elapsed);
        render(&app, spinner, f);
    });

    Ok(())
}

fn web_key(code: KeyCode) -> Option<WebKey> {
    Some(match code {
        KeyCode::Char(ch) => WebKey::Char(ch),
        KeyCode::Enter => WebKey::Enter,
        KeyCode::Backspace => WebKey::Backspace,
        KeyCode::Tab => WebKey::Tab,
        KeyCode::Esc => WebKey::Esc,
        KeyCode::Up => WebKey::Up,
        KeyCode::Down => WebKey::Down,
        KeyCode::Left => WebKey::Left,
        KeyCode::Right => WebKey::Right,
        KeyCode::PageUp => WebKey::PageUp,
        KeyCode::PageDown => WebKey::PageDown,
        KeyCode::Home => WebKey::Home,
        KeyCode::End => WebKey::End,
        KeyCode::F(n) => WebKey::F(n),
        _ => return None,
    })
}

/// Start every queued effect. Requests settle back into the shared state.
fn run_effects(state: &Rc<RefCell<WebApp>>, client: &SupersetFetch) {
    let effects = state.borrow_mut().take_effects();
    for effect in effects {
        match effect {
            Effect::Request(request) => {
                let state = state.clone();
                let client = client.clone();
                spawn_local(async move {
                    if let Some(outcome) = client.perform(request).await {
                        state.borrow_mut().apply_outcome(outcome);
                        run_effects(&state, &client);
                    }
                });
            }
            Effect::OpenUrl(url) => open_tab(&url),
            Effect::CopyToClipboard(_) => {
                web_sys::console::warn_1(&"clipboard is not available in the browser shell".into());
            }
        }
    }
}

fn open_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(error) = window.open_with_url_and_target(url, "_blank") {
        web_sys::console::error_2(&"Failed to open dashboard".into(), &error);
    }
}

fn spinner_frame(spinner: f64) -> &'static str {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = spinner as usize % SPINNER.len();
    SPINNER[index]
}

fn render(app: &WebApp, spinner: f64, f: &mut Frame<'_>) {
    let area = f.area();
    let block = Block::default()
        .title("SmartERP BI")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 1));
    f.render_widget(block, area);

    let [tabs_area, body, banner_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let titles = WebTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| TextLine::from(format!("{} {}", i + 1, tab.title())))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, tabs_area);

    match app.tab {
        WebTab::Dashboards => render_dashboards(&app.dashboards, f, body),
        WebTab::Generate => render_generate(&app.generate, spinner, f, body),
    }

    render_banner(&app.banner, f, banner_area);

    let help = match app.tab {
        WebTab::Dashboards => "Tab/1-2: pages  ↑/↓: select  Enter: show  /: filter  o: open  r: refresh",
        WebTab::Generate => "Tab: pages  Enter: generate  ←/→: model  F2: open",
    };
    f.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center),
        help_area,
    );
}

fn render_dashboards(state: &DashboardsState, f: &mut Frame<'_>, area: Rect) {
    let [list_area, embed_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    let list_block = Block::default()
        .title(if state.filter.is_empty() && !state.filtering {
            "Dashboards".to_string()
        } else {
            format!("Dashboards /{}", state.filter)
        })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    match &state.dashboards {
        Loadable::NotRequested | Loadable::Loading => {
            f.render_widget(
                Paragraph::new("Loading dashboards...")
                    .block(list_block)
                    .alignment(Alignment::Center),
                list_area,
            );
        }
        Loadable::Loaded(all) if all.is_empty() => {
            f.render_widget(
                Paragraph::new("No dashboards found.")
                    .block(list_block)
                    .alignment(Alignment::Center),
                list_area,
            );
        }
        Loadable::Loaded(_) => {
            let visible = state.visible();
            let max_rows = list_area.height.saturating_sub(3) as usize;
            let offset = state.selected.saturating_sub(max_rows.saturating_sub(1));
            let rows = visible
                .iter()
                .enumerate()
                .skip(offset)
                .take(max_rows)
                .map(|(i, dashboard)| {
                    let style = if i == state.selected {
                        Style::default()
                            .fg(Color::White)
                            .bg(Color::Rgb(0, 0, 238))
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Row::new(vec![
                        Cell::from(dashboard.id.to_string()),
                        Cell::from(dashboard.dashboard_title.clone()),
                    ])
                    .style(style)
                });
            let header = Row::new(vec![Cell::from("ID"), Cell::from("Title")]).style(
                Style::default()
                    .fg(Color::Rgb(0, 0, 238))
                    .bg(Color::Rgb(200, 200, 200))
                    .add_modifier(Modifier::BOLD),
            );
            let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(10)])
                .header(header)
                .block(list_block)
                .column_spacing(1);
            f.render_widget(table, list_area);
        }
    }

    let lines = match state.embed_view() {
        None => vec![TextLine::from(Span::styled(
            "Select a dashboard and press Enter.",
            Style::default().fg(Color::Gray),
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
                "o: open in a new tab   Esc: close",
                Style::default().fg(Color::Gray),
            )),
        ],
    };
    let embed = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Dashboard")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(embed, embed_area);
}

fn render_generate(state: &GeneratePageState, spinner: f64, f: &mut Frame<'_>, area: Rect) {
    let [form_area, result_area] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).areas(area);

    let mut model_spans = vec![Span::styled("Model: ", Style::default().fg(Color::Gray))];
    for model in ModelChoice::ALL {
        let style = if model == state.form.model {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        model_spans.push(Span::styled(format!(" {} ", model.label()), style));
        model_spans.push(Span::raw(" "));
    }

    let mut form_lines = vec![
        TextLine::from(Span::styled(
            format!("> {}", state.form.input),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(model_spans),
    ];
    if state.phase.is_loading() {
        form_lines.push(TextLine::from(Span::styled(
            format!("{} Generating...", spinner_frame(spinner)),
            Style::default().fg(Color::Cyan),
        )));
    }
    let form = Paragraph::new(Text::from(form_lines))
        .block(
            Block::default()
                .title("Generate Dashboard")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(form, form_area);

    let lines = if let Some(error) = &state.error {
        vec![TextLine::from(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red),
        ))]
    } else if let Some(url) = &state.dashboard_url {
        vec![
            TextLine::from(Span::styled(
                "View Dashboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            TextLine::from(Span::styled(
                url.as_str(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ]
    } else {
        Vec::new()
    };
    let result = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Result").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(result, result_area);
}

fn render_banner(banner: &BannerSlot, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let Some(notice) = banner.current() else {
        f.render_widget(block.border_style(Style::default().fg(Color::DarkGray)), area);
        return;
    };
    let color = match notice.severity {
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    };
    let paragraph = Paragraph::new(TextLine::from(vec![
        Span::styled(
            format!("{}: ", notice.severity.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(notice.message.as_str(), Style::default().fg(color)),
    ]))
    .block(block.border_style(Style::default().fg(color)));
    f.render_widget(paragraph, area);
}
