//! Past SQL generations recorded by the backend.

use super::Loadable;
use crate::wire::QueryHistoryEntry;
use crate::{ApiError, Notice, Request, Update};

pub const FAILED_MESSAGE: &str = "Failed to load query history";

#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    pub entries: Loadable<Vec<QueryHistoryEntry>>,
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub enum HistoryEvent {
    Open,
    Loaded(Result<Vec<QueryHistoryEntry>, ApiError>),
    SelectPrev,
    SelectNext,
}

impl HistoryState {
    pub fn selected_entry(&self) -> Option<&QueryHistoryEntry> {
        self.entries
            .loaded()
            .and_then(|entries| entries.get(self.selected))
    }

    pub fn update(&mut self, event: HistoryEvent) -> Update {
        match event {
            HistoryEvent::Open => {
                if self.entries.is_loading() {
                    return Update::none();
                }
                self.entries = Loadable::Loading;
                Update::request(Request::QueryHistory)
            }
            HistoryEvent::Loaded(Ok(entries)) => {
                self.selected = self.selected.min(entries.len().saturating_sub(1));
                self.entries = Loadable::Loaded(entries);
                Update::none()
            }
            HistoryEvent::Loaded(Err(err)) => {
                self.entries = Loadable::Loaded(Vec::new());
                self.selected = 0;
                Update::notice(Notice::error(err.user_message_or(FAILED_MESSAGE)))
            }
            HistoryEvent::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                Update::none()
            }
            HistoryEvent::SelectNext => {
                let len = self.entries.loaded().map_or(0, Vec::len);
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                Update::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(query: &str) -> QueryHistoryEntry {
        QueryHistoryEntry {
            natural_language_query: Some(query.to_string()),
            ..QueryHistoryEntry::default()
        }
    }

    #[test]
    fn open_requests_history() {
        let mut state = HistoryState::default();
        assert_eq!(
            state.update(HistoryEvent::Open).requested(),
            Some(&Request::QueryHistory)
        );
        assert!(state.entries.is_loading());
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut state = HistoryState::default();
        state.update(HistoryEvent::Loaded(Ok(vec![entry("a"), entry("b")])));

        state.update(HistoryEvent::SelectNext);
        state.update(HistoryEvent::SelectNext);
        assert_eq!(
            state
                .selected_entry()
                .and_then(|e| e.natural_language_query.as_deref()),
            Some("b")
        );

        state.update(HistoryEvent::SelectPrev);
        state.update(HistoryEvent::SelectPrev);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn failure_reports_server_message() {
        let mut state = HistoryState::default();
        state.update(HistoryEvent::Open);
        let update = state.update(HistoryEvent::Loaded(Err(ApiError::Server {
            status: 404,
            message: None,
        })));
        assert_eq!(update.notice, Some(Notice::error(FAILED_MESSAGE)));
        assert_eq!(state.entries, Loadable::Loaded(Vec::new()));
    }
}
