use crate::app::state::App;
use crossterm::event::KeyCode;
use smarterp_core::pages::history::HistoryEvent;

pub fn handle_history_input(app: &mut App, key: KeyCode) {
    let event = match key {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('r') => HistoryEvent::Open,
        KeyCode::Up => HistoryEvent::SelectPrev,
        KeyCode::Down => HistoryEvent::SelectNext,
        _ => return,
    };
    let update = app.history.update(event);
    app.apply(update);
}
