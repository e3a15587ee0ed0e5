use crate::app::input::helpers::edit_prompt;
use crate::app::state::App;
use crossterm::event::KeyCode;
use smarterp_core::pages::generate_page::GeneratePageEvent;
use smarterp_core::pages::generator::GeneratorEvent;
use smarterp_core::pages::query::QueryEvent;

pub fn handle_query_input(app: &mut App, key: KeyCode) {
    let update = match key {
        KeyCode::Enter => app.query.update(QueryEvent::Submit),
        KeyCode::F(2) => app.query.update(QueryEvent::Copy),
        _ => {
            edit_prompt(&mut app.query.form, key);
            return;
        }
    };
    app.apply(update);
}

pub fn handle_generator_input(app: &mut App, key: KeyCode) {
    let update = match key {
        KeyCode::Enter => app.generator.update(GeneratorEvent::Submit),
        KeyCode::F(2) => app.generator.update(GeneratorEvent::OpenLink),
        _ => {
            edit_prompt(&mut app.generator.form, key);
            return;
        }
    };
    app.apply(update);
}

pub fn handle_generate_page_input(app: &mut App, key: KeyCode) {
    let update = match key {
        KeyCode::Enter => app.generate_page.update(GeneratePageEvent::Submit),
        KeyCode::F(2) => app.generate_page.update(GeneratePageEvent::OpenDashboard),
        _ => {
            edit_prompt(&mut app.generate_page.form, key);
            return;
        }
    };
    app.apply(update);
}
