// UI module for smarterp-bi
// Lays out the navbar, the active page, the banner and the shortcut line

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let [navbar, body, banner, shortcuts] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    widgets::navbar::render_navbar(app.screen, f, navbar);

    match app.screen {
        AppScreen::Query => screens::query::render_query(app, f, body),
        AppScreen::Generator => screens::generator::render_generator(app, f, body),
        AppScreen::Explainer => screens::explainer::render_explainer(app, f, body),
        AppScreen::Dashboards => screens::dashboards::render_dashboards(app, f, body),
        AppScreen::GeneratePage => screens::generate_page::render_generate_page(app, f, body),
        AppScreen::History => screens::history::render_history(app, f, body),
        AppScreen::Settings => screens::settings::render_settings(app, f, body),
    }

    widgets::banner::render_banner(&app.banner, f, banner);
    widgets::shortcuts::render_shortcuts(&shortcuts_for(app), f, shortcuts);

    if app.show_help {
        screens::help::render_help_popup(f, f.area());
    }
}

fn shortcuts_for(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut keys = vec![("Tab", "Next page"), ("F1", "Help")];
    match app.screen {
        AppScreen::Query => {
            keys.extend([("Enter", "Generate"), ("←/→", "Model"), ("F2", "Copy")]);
        }
        AppScreen::Generator => {
            keys.extend([("Enter", "Create"), ("←/→", "Model"), ("F2", "Open link")]);
        }
        AppScreen::Explainer => {
            keys.extend([("Enter", "Ask"), ("↑/↓", "Select"), ("F2", "Expand")]);
        }
        AppScreen::Dashboards if app.dashboards.filtering => {
            keys.extend([("Enter", "Apply filter"), ("Esc", "Clear filter")]);
        }
        AppScreen::Dashboards => keys.extend([
            ("Enter", "Show"),
            ("/", "Filter"),
            ("o", "Open"),
            ("r", "Refresh"),
            ("q", "Quit"),
        ]),
        AppScreen::GeneratePage => {
            keys.extend([("Enter", "Generate"), ("←/→", "Model"), ("F2", "Open")]);
        }
        AppScreen::History => keys.extend([("↑/↓", "Select"), ("r", "Refresh"), ("q", "Quit")]),
        AppScreen::Settings => keys.extend([("↑/↓", "Model"), ("Enter", "Save"), ("q", "Quit")]),
    }
    keys.push(("F10", "Quit"));
    keys
}
