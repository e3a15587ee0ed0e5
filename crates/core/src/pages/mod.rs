//! One reducer per page of the console.

pub mod dashboards;
pub mod explainer;
pub mod generate_page;
pub mod generator;
pub mod history;
pub mod query;
pub mod settings;

use crate::ModelChoice;

/// Free-text prompt plus model selector, the input half of every form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptForm {
    pub input: String,
    pub model: ModelChoice,
}

impl PromptForm {
    pub fn new(model: ModelChoice) -> Self {
        Self {
            input: String::new(),
            model,
        }
    }

    pub fn push(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    pub fn next_model(&mut self) {
        self.model = self.model.next();
    }

    pub fn prev_model(&mut self) {
        self.model = self.model.prev();
    }
}

/// Data that arrives asynchronously.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Loadable<T> {
    #[default]
    NotRequested,
    Loading,
    Loaded(T),
}

impl<T> Loadable<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
