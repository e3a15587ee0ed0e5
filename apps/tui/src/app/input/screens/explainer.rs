use crate::app::input::helpers::edit_prompt;
use crate::app::state::App;
use crossterm::event::KeyCode;
use smarterp_core::pages::explainer::ExplainerEvent;

pub fn handle_explainer_input(app: &mut App, key: KeyCode) {
    let event = match key {
        KeyCode::Enter => ExplainerEvent::Submit,
        KeyCode::Up => ExplainerEvent::SelectPrev,
        KeyCode::Down => ExplainerEvent::SelectNext,
        KeyCode::F(2) => ExplainerEvent::ToggleSelected,
        _ => {
            edit_prompt(&mut app.explainer.form, key);
            return;
        }
    };
    let update = app.explainer.update(event);
    app.apply(update);
}
