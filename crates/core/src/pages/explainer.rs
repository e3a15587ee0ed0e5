//! Data explainer with its accordion of previous answers.

use super::PromptForm;
use crate::wire::Explanation;
use crate::{ApiError, ModelChoice, Notice, Phase, Request, Update};

pub const REQUIRED_MESSAGE: &str = "Please enter a question";
pub const FAILED_MESSAGE: &str = "Failed to get explanation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationRecord {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub insights: Vec<String>,
    pub timestamp: String,
}

/// Client clock reading taken by the shell when an answer arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub millis: u64,
    pub display: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExplainerState {
    pub form: PromptForm,
    /// Most recent first.
    pub history: Vec<ExplanationRecord>,
    pub expanded: Option<u64>,
    pub selected: usize,
    pub phase: Phase,
}

#[derive(Debug, Clone)]
pub enum ExplainerEvent {
    Submit,
    Settled {
        question: String,
        result: Result<Explanation, ApiError>,
        stamp: Stamp,
    },
    SelectPrev,
    SelectNext,
    /// Expand the selected entry, collapsing any other.
    ToggleSelected,
}

impl ExplainerState {
    pub fn new(model: ModelChoice) -> Self {
        Self {
            form: PromptForm::new(model),
            ..Self::default()
        }
    }

    pub fn update(&mut self, event: ExplainerEvent) -> Update {
        match event {
            ExplainerEvent::Submit => {
                if self.phase.is_loading() {
                    return Update::none();
                }
                if self.form.is_blank() {
                    return Update::notice(Notice::warning(REQUIRED_MESSAGE));
                }
                self.phase = Phase::Loading;
                Update::request(Request::ExplainData {
                    question: self.form.input.clone(),
                    model: self.form.model,
                })
            }
            ExplainerEvent::Settled {
                question,
                result: Ok(explanation),
                stamp,
            } => {
                self.phase = Phase::Idle;
                let id = self.next_id(stamp.millis);
                self.history.insert(
                    0,
                    ExplanationRecord {
                        id,
                        question,
                        answer: explanation.answer,
                        insights: explanation.insights.unwrap_or_default(),
                        timestamp: stamp.display,
                    },
                );
                self.selected = 0;
                self.form.clear();
                Update::none()
            }
            ExplainerEvent::Settled {
                result: Err(err), ..
            } => {
                self.phase = Phase::Idle;
                Update::notice(Notice::error(err.user_message_or(FAILED_MESSAGE)))
            }
            ExplainerEvent::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                Update::none()
            }
            ExplainerEvent::SelectNext => {
                if self.selected + 1 < self.history.len() {
                    self.selected += 1;
                }
                Update::none()
            }
            ExplainerEvent::ToggleSelected => {
                if let Some(id) = self.history.get(self.selected).map(|record| record.id) {
                    self.toggle(id);
                }
                Update::none()
            }
        }
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded == Some(id)
    }

    fn toggle(&mut self, id: u64) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    // Ids follow the clock but never repeat, so the accordion can key on them.
    fn next_id(&self, millis: u64) -> u64 {
        self.history
            .first()
            .map_or(millis, |latest| millis.max(latest.id + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(millis: u64) -> Stamp {
        Stamp {
            millis,
            display: format!("t{millis}"),
        }
    }

    fn answered(state: &mut ExplainerState, question: &str, answer: &str, millis: u64) {
        state.form.input = question.to_string();
        state.update(ExplainerEvent::Submit);
        state.update(ExplainerEvent::Settled {
            question: question.to_string(),
            result: Ok(Explanation {
                answer: answer.to_string(),
                insights: Some(vec!["Q3 dipped".to_string(), "Returns rose".to_string()]),
            }),
            stamp: stamp(millis),
        });
    }

    #[test]
    fn blank_question_warns_without_request() {
        let mut state = ExplainerState::new(ModelChoice::Gemini);
        let update = state.update(ExplainerEvent::Submit);

        assert!(update.effect.is_none());
        assert_eq!(update.notice, Some(Notice::warning(REQUIRED_MESSAGE)));
    }

    #[test]
    fn submit_sends_question_and_model() {
        let mut state = ExplainerState::new(ModelChoice::Deepseek);
        state.form.input = "Why did sales drop last quarter?".to_string();

        let update = state.update(ExplainerEvent::Submit);
        assert_eq!(
            update.requested(),
            Some(&Request::ExplainData {
                question: "Why did sales drop last quarter?".to_string(),
                model: ModelChoice::Deepseek,
            })
        );
    }

    #[test]
    fn answers_are_prepended_and_input_cleared() {
        let mut state = ExplainerState::new(ModelChoice::Gemini);
        answered(&mut state, "first?", "one", 1_000);
        answered(&mut state, "second?", "two", 2_000);

        let questions: Vec<_> = state.history.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, ["second?", "first?"]);
        assert_eq!(state.history[0].insights.len(), 2);
        assert_eq!(state.history[0].timestamp, "t2000");
        assert!(state.form.input.is_empty());
    }

    #[test]
    fn ids_stay_unique_within_the_same_millisecond() {
        let mut state = ExplainerState::new(ModelChoice::Gemini);
        answered(&mut state, "a", "1", 5_000);
        answered(&mut state, "b", "2", 5_000);

        assert_ne!(state.history[0].id, state.history[1].id);
    }

    #[test]
    fn missing_insights_become_empty_list() {
        let mut state = ExplainerState::new(ModelChoice::Gemini);
        state.update(ExplainerEvent::Settled {
            question: "q".to_string(),
            result: Ok(Explanation {
                answer: "a".to_string(),
                insights: None,
            }),
            stamp: stamp(1),
        });
        assert!(state.history[0].insights.is_empty());
    }

    #[test]
    fn failure_leaves_history_and_input_intact() {
        let mut state = ExplainerState::new(ModelChoice::Gemini);
        answered(&mut state, "kept?", "yes", 1_000);
        state.form.input = "broken?".to_string();
        state.update(ExplainerEvent::Submit);

        let update = state.update(ExplainerEvent::Settled {
            question: "broken?".to_string(),
            result: Err(ApiError::Network("reset".to_string())),
            stamp: stamp(2_000),
        });

        assert_eq!(update.notice, Some(Notice::error(FAILED_MESSAGE)));
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.form.input, "broken?");
    }

    #[test]
    fn accordion_keeps_at_most_one_entry_open() {
        let mut state = ExplainerState::new(ModelChoice::Gemini);
        answered(&mut state, "a", "1", 1);
        answered(&mut state, "b", "2", 2);
        let (newest, oldest) = (state.history[0].id, state.history[1].id);

        state.update(ExplainerEvent::ToggleSelected);
        assert!(state.is_expanded(newest));

        state.update(ExplainerEvent::SelectNext);
        state.update(ExplainerEvent::ToggleSelected);
        assert!(state.is_expanded(oldest));
        assert!(!state.is_expanded(newest));

        state.update(ExplainerEvent::ToggleSelected);
        assert_eq!(state.expanded, None);
    }
}
