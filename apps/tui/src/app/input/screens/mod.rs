use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod dashboards;
mod explainer;
mod forms;
mod help;
mod history;
mod settings;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if handle_global_keys(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Query => forms::handle_query_input(app, key),
        AppScreen::Generator => forms::handle_generator_input(app, key),
        AppScreen::Explainer => explainer::handle_explainer_input(app, key),
        AppScreen::Dashboards => dashboards::handle_dashboards_input(app, key),
        AppScreen::GeneratePage => forms::handle_generate_page_input(app, key),
        AppScreen::History => history::handle_history_input(app, key),
        AppScreen::Settings => settings::handle_settings_input(app, key),
    }
}

fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::F(10) => app.running = false,
        KeyCode::Tab => app.switch_to(app.screen.next()),
        KeyCode::BackTab => app.switch_to(app.screen.prev()),
        KeyCode::Esc if app.banner.is_visible() => app.banner.dismiss(),
        _ => return false,
    }
    true
}
