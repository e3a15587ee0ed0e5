//! Preferred model, saved to the backend and applied to every form.

use crate::{ApiError, ModelChoice, Notice, Phase, Request, Update};

pub const FAILED_MESSAGE: &str = "Failed to update preference";

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Model shown in the selector.
    pub model: ModelChoice,
    /// Model last confirmed by the backend.
    pub saved: Option<ModelChoice>,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub enum SettingsEvent {
    NextModel,
    PrevModel,
    Save,
    Saved {
        model: ModelChoice,
        result: Result<(), ApiError>,
    },
}

impl SettingsState {
    pub fn new(model: ModelChoice) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn update(&mut self, event: SettingsEvent) -> Update {
        match event {
            SettingsEvent::NextModel => {
                self.model = self.model.next();
                Update::none()
            }
            SettingsEvent::PrevModel => {
                self.model = self.model.prev();
                Update::none()
            }
            SettingsEvent::Save => {
                if self.phase.is_loading() {
                    return Update::none();
                }
                self.phase = Phase::Loading;
                Update::request(Request::UpdatePreference { model: self.model })
            }
            SettingsEvent::Saved { model, result } => {
                self.phase = Phase::Idle;
                match result {
                    Ok(()) => {
                        self.saved = Some(model);
                        Update::notice(Notice::success(format!(
                            "Preferred model set to {}",
                            model.label()
                        )))
                    }
                    Err(err) => Update::notice(Notice::error(err.user_message_or(FAILED_MESSAGE))),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_posts_selected_model() {
        let mut state = SettingsState::new(ModelChoice::Gemini);
        state.update(SettingsEvent::NextModel);

        let update = state.update(SettingsEvent::Save);
        assert_eq!(
            update.requested(),
            Some(&Request::UpdatePreference {
                model: ModelChoice::Deepseek
            })
        );
    }

    #[test]
    fn confirmed_save_records_model_and_confirms() {
        let mut state = SettingsState::new(ModelChoice::Deepseek);
        state.update(SettingsEvent::Save);
        let update = state.update(SettingsEvent::Saved {
            model: ModelChoice::Deepseek,
            result: Ok(()),
        });

        assert_eq!(state.saved, Some(ModelChoice::Deepseek));
        assert_eq!(
            update.notice,
            Some(Notice::success("Preferred model set to DeepSeek"))
        );
    }

    #[test]
    fn failed_save_keeps_previous_preference() {
        let mut state = SettingsState::new(ModelChoice::Gemini);
        state.update(SettingsEvent::Save);
        let update = state.update(SettingsEvent::Saved {
            model: ModelChoice::Gemini,
            result: Err(ApiError::Network("refused".to_string())),
        });

        assert_eq!(state.saved, None);
        assert_eq!(update.notice, Some(Notice::error(FAILED_MESSAGE)));
    }
}
