//! Single-page "generate then show" flow over the dashboard-server routes.
//!
//! Shares the `{prompt, llm}` contract with [`super::generator`] but keeps
//! the prompt on success and shows errors inline instead of in the banner.

use super::PromptForm;
use crate::wire::DashboardCreated;
use crate::{ApiError, DashboardForm, Effect, ModelChoice, Phase, Request, Update};

#[derive(Debug, Clone, Default)]
pub struct GeneratePageState {
    pub form: PromptForm,
    pub dashboard_url: Option<String>,
    pub error: Option<String>,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub enum GeneratePageEvent {
    Submit,
    Settled(Result<DashboardCreated, ApiError>),
    OpenDashboard,
}

impl GeneratePageState {
    pub fn new(model: ModelChoice) -> Self {
        Self {
            form: PromptForm::new(model),
            ..Self::default()
        }
    }

    pub fn update(&mut self, event: GeneratePageEvent) -> Update {
        match event {
            GeneratePageEvent::Submit => {
                // The prompt field is required; a blank one never leaves the form.
                if self.form.is_blank() || self.phase.is_loading() {
                    return Update::none();
                }
                self.phase = Phase::Loading;
                self.error = None;
                self.dashboard_url = None;
                Update::request(Request::GenerateDashboard {
                    form: DashboardForm::GeneratePage,
                    prompt: self.form.input.clone(),
                    llm: self.form.model,
                })
            }
            GeneratePageEvent::Settled(result) => {
                self.phase = Phase::Idle;
                match result {
                    Ok(created) => self.dashboard_url = created.url().map(str::to_string),
                    Err(err) => self.error = Some(err.to_string()),
                }
                Update::none()
            }
            GeneratePageEvent::OpenDashboard => self
                .dashboard_url
                .clone()
                .map_or_else(Update::none, |url| Update::effect(Effect::OpenUrl(url))),
        }
    }
}
