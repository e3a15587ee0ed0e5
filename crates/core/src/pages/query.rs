//! Natural language to SQL.

use super::PromptForm;
use crate::wire::SqlResponse;
use crate::{ApiError, Effect, ModelChoice, Notice, Phase, Request, Update};

pub const FAILED_MESSAGE: &str = "Failed to generate SQL";
pub const COPIED_MESSAGE: &str = "SQL copied to clipboard!";

#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub form: PromptForm,
    pub result: Option<SqlResponse>,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub enum QueryEvent {
    Submit,
    Settled(Result<SqlResponse, ApiError>),
    Copy,
}

impl QueryState {
    pub fn new(model: ModelChoice) -> Self {
        Self {
            form: PromptForm::new(model),
            ..Self::default()
        }
    }

    pub fn sql(&self) -> Option<&str> {
        self.result.as_ref().map(|result| result.sql.as_str())
    }

    pub fn update(&mut self, event: QueryEvent) -> Update {
        match event {
            QueryEvent::Submit => {
                // Blank prompts are dropped without a banner.
                if self.form.is_blank() || self.phase.is_loading() {
                    return Update::none();
                }
                self.phase = Phase::Loading;
                Update::request(Request::GenerateSql {
                    prompt: self.form.input.clone(),
                    model: self.form.model,
                })
            }
            QueryEvent::Settled(Ok(response)) => {
                self.phase = Phase::Idle;
                self.result = Some(response);
                Update::none()
            }
            QueryEvent::Settled(Err(err)) => {
                self.phase = Phase::Idle;
                Update::notice(Notice::error(err.user_message_or(FAILED_MESSAGE)))
            }
            QueryEvent::Copy => match self.sql() {
                Some(sql) => Update::effect(Effect::CopyToClipboard(sql.to_string()))
                    .with_notice(Notice::success(COPIED_MESSAGE)),
                None => Update::none(),
            },
        }
    }
}
