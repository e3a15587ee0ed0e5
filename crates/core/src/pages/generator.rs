//! Dashboard generator form, posting to the dashboard-server generation route.

use super::PromptForm;
use crate::wire::DashboardCreated;
use crate::{ApiError, DashboardForm, Effect, ModelChoice, Notice, Phase, Request, Update};

pub const REQUIRED_MESSAGE: &str = "Dashboard request is required";
pub const CREATED_MESSAGE: &str = "Dashboard created successfully!";
pub const FAILED_MESSAGE: &str = "Failed to generate dashboard";

#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    pub form: PromptForm,
    pub dashboard_url: Option<String>,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub enum GeneratorEvent {
    Submit,
    Settled(Result<DashboardCreated, ApiError>),
    OpenLink,
}

impl GeneratorState {
    pub fn new(model: ModelChoice) -> Self {
        Self {
            form: PromptForm::new(model),
            ..Self::default()
        }
    }

    pub fn update(&mut self, event: GeneratorEvent) -> Update {
        match event {
            GeneratorEvent::Submit => {
                if self.phase.is_loading() {
                    return Update::none();
                }
                if self.form.is_blank() {
                    return Update::notice(Notice::warning(REQUIRED_MESSAGE));
                }
                self.phase = Phase::Loading;
                Update::request(Request::GenerateDashboard {
                    form: DashboardForm::Generator,
                    prompt: self.form.input.clone(),
                    llm: self.form.model,
                })
            }
            GeneratorEvent::Settled(Ok(created)) => {
                self.phase = Phase::Idle;
                self.dashboard_url = created.url().map(str::to_string);
                self.form.clear();
                Update::notice(Notice::success(CREATED_MESSAGE))
            }
            GeneratorEvent::Settled(Err(err)) => {
                self.phase = Phase::Idle;
                Update::notice(Notice::error(err.user_message_or(FAILED_MESSAGE)))
            }
            GeneratorEvent::OpenLink => self
                .dashboard_url
                .clone()
                .map_or_else(Update::none, |url| Update::effect(Effect::OpenUrl(url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(prompt: &str) -> GeneratorState {
        let mut state = GeneratorState::new(ModelChoice::Deepseek);
        state.form.input = prompt.to_string();
        state
    }

    #[test]
    fn blank_prompt_warns_without_request() {
        let mut state = typed("\t ");
        let update = state.update(GeneratorEvent::Submit);

        assert!(update.effect.is_none());
        assert_eq!(update.notice, Some(Notice::warning(REQUIRED_MESSAGE)));
    }

    #[test]
    fn submit_posts_prompt_with_llm_like_generate_page() {
        let mut state = GeneratorState::new(ModelChoice::Gemini);
        state.form.input = "monthly sales".to_string();
        let update = state.update(GeneratorEvent::Submit);

        assert_eq!(
            update.requested(),
            Some(&Request::GenerateDashboard {
                form: DashboardForm::Generator,
                prompt: "monthly sales".to_string(),
                llm: ModelChoice::Gemini,
            })
        );
        assert_eq!(state.phase, Phase::Loading);
    }

    #[test]
    fn rejected_generation_reports_dashboard_server_message() {
        let mut state = typed("sales");
        state.update(GeneratorEvent::Submit);
        let update = state.update(GeneratorEvent::Settled(Err(ApiError::Rejected(
            FAILED_MESSAGE.to_string(),
        ))));

        assert_eq!(update.notice, Some(Notice::error(FAILED_MESSAGE)));
        assert_eq!(state.form.input, "sales");
    }

    #[test]
    fn success_links_returned_url_and_clears_input() {
        let mut state = typed("monthly sales trends");
        state.update(GeneratorEvent::Submit);
        let update = state.update(GeneratorEvent::Settled(Ok(DashboardCreated {
            dashboard_url: Some("http://localhost:8088/superset/dashboard/12/".to_string()),
            dashboard_id: Some(12),
            message: Some("Dashboard created successfully.".to_string()),
        })));

        assert_eq!(update.notice, Some(Notice::success(CREATED_MESSAGE)));
        assert_eq!(
            state.dashboard_url.as_deref(),
            Some("http://localhost:8088/superset/dashboard/12/")
        );
        assert!(state.form.input.is_empty());
    }

    #[test]
    fn success_without_url_shows_no_link() {
        let mut state = typed("sales");
        state.dashboard_url = Some("http://old".to_string());
        state.update(GeneratorEvent::Submit);
        let update = state.update(GeneratorEvent::Settled(Ok(DashboardCreated::default())));

        assert_eq!(update.notice, Some(Notice::success(CREATED_MESSAGE)));
        assert_eq!(state.dashboard_url, None);
        assert_eq!(state.update(GeneratorEvent::OpenLink), Update::none());
    }

    #[test]
    fn failure_keeps_input_and_reports_server_message() {
        let mut state = typed("sales");
        state.update(GeneratorEvent::Submit);
        let update = state.update(GeneratorEvent::Settled(Err(ApiError::Server {
            status: 500,
            message: Some("Dashboard generation failed: timeout".to_string()),
        })));

        assert_eq!(
            update.notice,
            Some(Notice::error("Dashboard generation failed: timeout"))
        );
        assert_eq!(state.form.input, "sales");
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn open_link_hands_url_to_shell() {
        let mut state = typed("");
        state.dashboard_url = Some("http://localhost:8088/superset/dashboard/3/".to_string());
        let update = state.update(GeneratorEvent::OpenLink);
        assert_eq!(
            update.effect,
            Some(Effect::OpenUrl(
                "http://localhost:8088/superset/dashboard/3/".to_string()
            ))
        );
    }
}
