use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use smarterp_core::Outcome;
use std::io::Stdout;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::app::{handle_input, App, AppActions};
use crate::ui;

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    actions: &AppActions,
    outcomes: &mut UnboundedReceiver<Outcome>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {}
            }
        }

        run_effects(app, actions);

        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_outcome(outcome);
        }
        // Settled outcomes may chain further effects.
        run_effects(app, actions);

        // Let spawned requests make progress between frames
        tokio::task::yield_now().await;
    }
    Ok(())
}

fn run_effects(app: &mut App, actions: &AppActions) {
    for effect in app.take_effects() {
        if let Some(notice) = actions.execute(effect) {
            app.notify(notice);
        }
    }
}
