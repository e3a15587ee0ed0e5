mod helpers;
pub mod screens;

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppScreen;
    use crate::config::AppConfig;
    use smarterp_core::{Effect, ModelChoice, Notice, Request};

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|ch| handle_input(app, KeyCode::Char(ch)));
    }

    #[test]
    fn enter_on_blank_prompt_does_nothing() {
        let mut app = app();
        type_text(&mut app, "   ");
        handle_input(&mut app, KeyCode::Enter);
        assert!(app.take_effects().is_empty());
        assert!(!app.banner.is_visible());
    }

    #[test]
    fn typed_prompt_submits_with_selected_model() {
        let mut app = app();
        type_text(&mut app, "top customers");
        handle_input(&mut app, KeyCode::Right);
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::GenerateSql {
                prompt: "top customers".to_string(),
                model: ModelChoice::Deepseek,
            })]
        );
        assert!(app.query.phase.is_loading());
    }

    #[test]
    fn q_is_text_on_form_pages() {
        let mut app = app();
        type_text(&mut app, "q");
        assert!(app.running);
        assert_eq!(app.query.form.input, "q");
    }

    #[test]
    fn f10_quits_from_anywhere() {
        let mut app = app();
        handle_input(&mut app, KeyCode::F(10));
        assert!(!app.running);
    }

    #[test]
    fn tab_to_dashboards_fetches_the_list() {
        let mut app = app();
        for _ in 0..3 {
            handle_input(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.screen, AppScreen::Dashboards);
        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::ListDashboards)]
        );
    }

    #[test]
    fn back_tab_wraps_to_settings() {
        let mut app = app();
        handle_input(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen, AppScreen::Settings);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        handle_input(&mut app, KeyCode::F(1));
        type_text(&mut app, "abc");
        assert!(app.query.form.input.is_empty());

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn esc_dismisses_the_banner() {
        let mut app = app();
        app.notify(Notice::success("SQL copied to clipboard!"));
        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.banner.is_visible());
    }

    #[test]
    fn dashboards_filter_mode_captures_text() {
        let mut app = app();
        app.switch_to(AppScreen::Dashboards);
        app.take_effects();

        handle_input(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "sales");
        assert_eq!(app.dashboards.filter, "sales");

        handle_input(&mut app, KeyCode::Enter);
        assert!(!app.dashboards.filtering);
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn settings_enter_saves_the_preference() {
        let mut app = app();
        app.switch_to(AppScreen::Settings);
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(
            app.take_effects(),
            vec![Effect::Request(Request::UpdatePreference {
                model: ModelChoice::Deepseek,
            })]
        );
    }
}
