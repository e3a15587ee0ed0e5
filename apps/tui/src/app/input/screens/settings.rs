use crate::app::state::App;
use crossterm::event::KeyCode;
use smarterp_core::pages::settings::SettingsEvent;

pub fn handle_settings_input(app: &mut App, key: KeyCode) {
    let event = match key {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Up | KeyCode::Left => SettingsEvent::PrevModel,
        KeyCode::Down | KeyCode::Right => SettingsEvent::NextModel,
        KeyCode::Enter => SettingsEvent::Save,
        _ => return,
    };
    let update = app.settings.update(event);
    app.apply(update);
}
