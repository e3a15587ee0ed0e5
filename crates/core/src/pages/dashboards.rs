//! Dashboard list and the embed of the chosen dashboard.

use super::Loadable;
use crate::wire::{embed_url, DashboardDetail, DashboardId, DashboardSummary};
use crate::{ApiError, Effect, Notice, Request, Update};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch dashboards";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to fetch dashboard detail";

const PAGE_STEP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedState {
    pub id: DashboardId,
    pub detail: Loadable<Option<DashboardDetail>>,
}

/// What the embed panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedView<'a> {
    Loading,
    NotFound,
    Ready { title: &'a str, url: String },
}

#[derive(Debug, Clone)]
pub struct DashboardsState {
    pub dashboards: Loadable<Vec<DashboardSummary>>,
    /// Index into [`DashboardsState::visible`].
    pub selected: usize,
    pub filter: String,
    pub filtering: bool,
    pub embed: Option<EmbedState>,
    dashboard_server: String,
}

#[derive(Debug, Clone)]
pub enum DashboardsEvent {
    /// The page became visible; the list is fetched every time.
    Open,
    Listed(Result<Vec<DashboardSummary>, ApiError>),
    SelectPrev,
    SelectNext,
    PageUp,
    PageDown,
    SelectFirst,
    SelectLast,
    Choose,
    DetailLoaded {
        id: DashboardId,
        result: Result<Option<DashboardDetail>, ApiError>,
    },
    StartFilter,
    FilterPush(char),
    FilterPop,
    /// Leave filter mode, keeping the filter text.
    FinishFilter,
    ClearFilter,
    OpenEmbed,
    CloseEmbed,
}

impl DashboardsState {
    pub fn new(dashboard_server: impl Into<String>) -> Self {
        Self {
            dashboards: Loadable::NotRequested,
            selected: 0,
            filter: String::new(),
            filtering: false,
            embed: None,
            dashboard_server: dashboard_server.into(),
        }
    }

    /// Dashboards matching the filter, best match first.
    pub fn visible(&self) -> Vec<&DashboardSummary> {
        let Some(all) = self.dashboards.loaded() else {
            return Vec::new();
        };

        let pattern = self.filter.trim();
        if pattern.is_empty() {
            return all.iter().collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<_> = all
            .iter()
            .filter_map(|dashboard| {
                matcher
                    .fuzzy_match(&dashboard.dashboard_title, pattern)
                    .map(|score| (score, dashboard))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, dashboard)| dashboard).collect()
    }

    pub fn embed_view(&self) -> Option<EmbedView<'_>> {
        let embed = self.embed.as_ref()?;
        Some(match &embed.detail {
            Loadable::NotRequested | Loadable::Loading => EmbedView::Loading,
            Loadable::Loaded(None) => EmbedView::NotFound,
            Loadable::Loaded(Some(detail)) => EmbedView::Ready {
                title: &detail.dashboard_title,
                url: embed_url(&self.dashboard_server, embed.id),
            },
        })
    }

    pub fn update(&mut self, event: DashboardsEvent) -> Update {
        match event {
            DashboardsEvent::Open => {
                if self.dashboards.is_loading() {
                    return Update::none();
                }
                self.dashboards = Loadable::Loading;
                Update::request(Request::ListDashboards)
            }
            DashboardsEvent::Listed(result) => {
                let (dashboards, update) = match result {
                    Ok(dashboards) => (dashboards, Update::none()),
                    Err(err) => (
                        Vec::new(),
                        Update::notice(Notice::error(err.user_message_or(LIST_FAILED_MESSAGE))),
                    ),
                };
                self.dashboards = Loadable::Loaded(dashboards);
                self.clamp_selection();
                update
            }
            DashboardsEvent::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                Update::none()
            }
            DashboardsEvent::SelectNext => {
                self.move_selection(1);
                Update::none()
            }
            DashboardsEvent::PageUp => {
                self.selected = self.selected.saturating_sub(PAGE_STEP);
                Update::none()
            }
            DashboardsEvent::PageDown => {
                self.move_selection(PAGE_STEP);
                Update::none()
            }
            DashboardsEvent::SelectFirst => {
                self.selected = 0;
                Update::none()
            }
            DashboardsEvent::SelectLast => {
                self.selected = self.visible().len().saturating_sub(1);
                Update::none()
            }
            DashboardsEvent::Choose => self.choose(),
            DashboardsEvent::DetailLoaded { id, result } => {
                let Some(embed) = self.embed.as_mut().filter(|embed| embed.id == id) else {
                    // A newer selection superseded this response.
                    return Update::none();
                };
                match result {
                    Ok(detail) => {
                        embed.detail = Loadable::Loaded(detail);
                        Update::none()
                    }
                    Err(err) => {
                        embed.detail = Loadable::Loaded(None);
                        Update::notice(Notice::error(err.user_message_or(DETAIL_FAILED_MESSAGE)))
                    }
                }
            }
            DashboardsEvent::StartFilter => {
                self.filtering = true;
                Update::none()
            }
            DashboardsEvent::FilterPush(ch) => {
                self.filter.push(ch);
                self.selected = 0;
                Update::none()
            }
            DashboardsEvent::FilterPop => {
                self.filter.pop();
                self.selected = 0;
                Update::none()
            }
            DashboardsEvent::FinishFilter => {
                self.filtering = false;
                Update::none()
            }
            DashboardsEvent::ClearFilter => {
                self.filtering = false;
                self.filter.clear();
                self.selected = 0;
                Update::none()
            }
            DashboardsEvent::OpenEmbed => match self.embed_view() {
                Some(EmbedView::Ready { url, .. }) => Update::effect(Effect::OpenUrl(url)),
                _ => Update::none(),
            },
            DashboardsEvent::CloseEmbed => {
                self.embed = None;
                Update::none()
            }
        }
    }

    fn choose(&mut self) -> Update {
        let Some(id) = self.visible().get(self.selected).map(|dashboard| dashboard.id) else {
            return Update::none();
        };

        if let Some(embed) = &self.embed {
            if embed.id == id && !matches!(embed.detail, Loadable::NotRequested) {
                return Update::none();
            }
        }

        self.embed = Some(EmbedState {
            id,
            detail: Loadable::Loading,
        });
        Update::request(Request::DashboardDetail { id })
    }

    fn move_selection(&mut self, step: usize) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + step).min(len - 1);
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER: &str = "http://localhost:8088/superset";

    fn summary(id: DashboardId, title: &str) -> DashboardSummary {
        DashboardSummary {
            id,
            dashboard_title: title.to_string(),
        }
    }

    fn listed() -> DashboardsState {
        let mut state = DashboardsState::new(SERVER);
        state.update(DashboardsEvent::Open);
        state.update(DashboardsEvent::Listed(Ok(vec![
            summary(4, "Sales Overview"),
            summary(9, "Inventory Levels"),
            summary(15, "Regional Sales"),
        ])));
        state
    }

    #[test]
    fn opening_fetches_the_list() {
        let mut state = DashboardsState::new(SERVER);
        let update = state.update(DashboardsEvent::Open);

        assert_eq!(update.requested(), Some(&Request::ListDashboards));
        assert!(state.dashboards.is_loading());
        assert_eq!(state.update(DashboardsEvent::Open), Update::none());
    }

    #[test]
    fn choosing_fetches_detail_and_embeds_by_id() {
        let mut state = listed();
        state.update(DashboardsEvent::SelectNext);

        let update = state.update(DashboardsEvent::Choose);
        assert_eq!(update.requested(), Some(&Request::DashboardDetail { id: 9 }));
        assert_eq!(state.embed_view(), Some(EmbedView::Loading));

        state.update(DashboardsEvent::DetailLoaded {
            id: 9,
            result: Ok(Some(DashboardDetail {
                dashboard_title: "Inventory Levels".to_string(),
            })),
        });
        assert_eq!(
            state.embed_view(),
            Some(EmbedView::Ready {
                title: "Inventory Levels",
                url: "http://localhost:8088/superset/dashboard/9/".to_string(),
            })
        );
    }

    #[test]
    fn missing_detail_shows_not_found() {
        let mut state = listed();
        state.update(DashboardsEvent::Choose);
        let update = state.update(DashboardsEvent::DetailLoaded {
            id: 4,
            result: Ok(None),
        });

        assert_eq!(update, Update::none());
        assert_eq!(state.embed_view(), Some(EmbedView::NotFound));
    }

    #[test]
    fn detail_failure_shows_not_found_and_error_banner() {
        let mut state = listed();
        state.update(DashboardsEvent::Choose);
        let update = state.update(DashboardsEvent::DetailLoaded {
            id: 4,
            result: Err(ApiError::Rejected(DETAIL_FAILED_MESSAGE.to_string())),
        });

        assert_eq!(update.notice, Some(Notice::error(DETAIL_FAILED_MESSAGE)));
        assert_eq!(state.embed_view(), Some(EmbedView::NotFound));
    }

    #[test]
    fn stale_detail_for_previous_selection_is_dropped() {
        let mut state = listed();
        state.update(DashboardsEvent::Choose);
        state.update(DashboardsEvent::SelectLast);
        state.update(DashboardsEvent::Choose);

        state.update(DashboardsEvent::DetailLoaded {
            id: 4,
            result: Ok(Some(DashboardDetail {
                dashboard_title: "Sales Overview".to_string(),
            })),
        });
        assert_eq!(state.embed_view(), Some(EmbedView::Loading));
    }

    #[test]
    fn list_failure_reports_and_shows_empty_list() {
        let mut state = DashboardsState::new(SERVER);
        state.update(DashboardsEvent::Open);
        let update = state.update(DashboardsEvent::Listed(Err(ApiError::Rejected(
            LIST_FAILED_MESSAGE.to_string(),
        ))));

        assert_eq!(update.notice, Some(Notice::error(LIST_FAILED_MESSAGE)));
        assert_eq!(state.dashboards, Loadable::Loaded(Vec::new()));
        assert_eq!(state.update(DashboardsEvent::Choose), Update::none());
    }

    #[test]
    fn filter_narrows_and_ranks_titles() {
        let mut state = listed();
        state.update(DashboardsEvent::StartFilter);
        "sales".chars().for_each(|ch| {
            state.update(DashboardsEvent::FilterPush(ch));
        });

        let titles: Vec<_> = state
            .visible()
            .iter()
            .map(|d| d.dashboard_title.as_str())
            .collect();
        assert_eq!(titles.len(), 2);
        assert!(!titles.contains(&"Inventory Levels"));

        state.update(DashboardsEvent::ClearFilter);
        assert_eq!(state.visible().len(), 3);
    }

    #[test]
    fn selection_stays_within_list() {
        let mut state = listed();
        state.update(DashboardsEvent::PageDown);
        assert_eq!(state.selected, 2);
        state.update(DashboardsEvent::SelectNext);
        assert_eq!(state.selected, 2);
        state.update(DashboardsEvent::PageUp);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn open_embed_launches_ready_url_only() {
        let mut state = listed();
        assert_eq!(state.update(DashboardsEvent::OpenEmbed), Update::none());

        state.update(DashboardsEvent::Choose);
        state.update(DashboardsEvent::DetailLoaded {
            id: 4,
            result: Ok(Some(DashboardDetail {
                dashboard_title: "Sales Overview".to_string(),
            })),
        });
        assert_eq!(
            state.update(DashboardsEvent::OpenEmbed).effect,
            Some(Effect::OpenUrl(
                "http://localhost:8088/superset/dashboard/4/".to_string()
            ))
        );
    }
}
