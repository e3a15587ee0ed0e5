use crossterm::event::KeyCode;
use smarterp_core::pages::PromptForm;

/// Shared prompt editing: text keys edit the input, Left/Right cycle the
/// model. Returns whether the key was consumed.
pub fn edit_prompt(form: &mut PromptForm, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(ch) => form.push(ch),
        KeyCode::Backspace => form.pop(),
        KeyCode::Left => form.prev_model(),
        KeyCode::Right => form.next_model(),
        _ => return false,
    }
    true
}
