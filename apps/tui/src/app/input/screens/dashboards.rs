use crate::app::state::App;
use crossterm::event::KeyCode;
use smarterp_core::pages::dashboards::DashboardsEvent;

pub fn handle_dashboards_input(app: &mut App, key: KeyCode) {
    let event = if app.dashboards.filtering {
        match key {
            KeyCode::Char(ch) => DashboardsEvent::FilterPush(ch),
            KeyCode::Backspace => DashboardsEvent::FilterPop,
            KeyCode::Enter => DashboardsEvent::FinishFilter,
            KeyCode::Esc => DashboardsEvent::ClearFilter,
            KeyCode::Up => DashboardsEvent::SelectPrev,
            KeyCode::Down => DashboardsEvent::SelectNext,
            _ => return,
        }
    } else {
        match key {
            KeyCode::Char('q') => {
                app.running = false;
                return;
            }
            KeyCode::Char('/') => DashboardsEvent::StartFilter,
            KeyCode::Char('r') => DashboardsEvent::Open,
            KeyCode::Char('o') => DashboardsEvent::OpenEmbed,
            KeyCode::Esc if app.dashboards.embed.is_some() => DashboardsEvent::CloseEmbed,
            KeyCode::Esc if !app.dashboards.filter.is_empty() => DashboardsEvent::ClearFilter,
            KeyCode::Up => DashboardsEvent::SelectPrev,
            KeyCode::Down => DashboardsEvent::SelectNext,
            KeyCode::PageUp => DashboardsEvent::PageUp,
            KeyCode::PageDown => DashboardsEvent::PageDown,
            KeyCode::Home => DashboardsEvent::SelectFirst,
            KeyCode::End => DashboardsEvent::SelectLast,
            KeyCode::Enter => DashboardsEvent::Choose,
            _ => return,
        }
    };
    let update = app.dashboards.update(event);
    app.apply(update);
}
