use crate::wire::{
    DashboardCreated, DashboardDetail, DashboardId, DashboardSummary, Explanation,
    QueryHistoryEntry, SqlResponse,
};
use crate::{ApiError, ModelChoice, Notice};

/// Which of the two dashboard forms a generation request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardForm {
    Generator,
    GeneratePage,
}

/// A backend call. Service A fills in the configured `user_id` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    GenerateSql { prompt: String, model: ModelChoice },
    /// Service B dashboard generation (`{prompt, llm}`), shared by both forms.
    GenerateDashboard {
        form: DashboardForm,
        prompt: String,
        llm: ModelChoice,
    },
    ExplainData { question: String, model: ModelChoice },
    ListDashboards,
    DashboardDetail { id: DashboardId },
    QueryHistory,
    UpdatePreference { model: ModelChoice },
}

impl Request {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GenerateSql { .. } => "generate_sql",
            Self::GenerateDashboard { .. } => "generate_dashboard",
            Self::ExplainData { .. } => "explain_data",
            Self::ListDashboards => "list_dashboards",
            Self::DashboardDetail { .. } => "dashboard_detail",
            Self::QueryHistory => "query_history",
            Self::UpdatePreference { .. } => "update_preference",
        }
    }
}

/// Something a page asks its shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Request(Request),
    CopyToClipboard(String),
    OpenUrl(String),
}

/// The settled result of a [`Request`], fed back to the page that asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    SqlGenerated(Result<SqlResponse, ApiError>),
    DashboardGenerated {
        form: DashboardForm,
        result: Result<DashboardCreated, ApiError>,
    },
    DataExplained {
        question: String,
        result: Result<Explanation, ApiError>,
    },
    DashboardsListed(Result<Vec<DashboardSummary>, ApiError>),
    DashboardDetailLoaded {
        id: DashboardId,
        result: Result<Option<DashboardDetail>, ApiError>,
    },
    QueryHistoryLoaded(Result<Vec<QueryHistoryEntry>, ApiError>),
    PreferenceUpdated {
        model: ModelChoice,
        result: Result<(), ApiError>,
    },
}

/// What a reducer wants done after handling an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    pub effect: Option<Effect>,
    pub notice: Option<Notice>,
}

impl Update {
    pub const fn none() -> Self {
        Self {
            effect: None,
            notice: None,
        }
    }

    pub const fn request(request: Request) -> Self {
        Self {
            effect: Some(Effect::Request(request)),
            notice: None,
        }
    }

    pub const fn effect(effect: Effect) -> Self {
        Self {
            effect: Some(effect),
            notice: None,
        }
    }

    pub const fn notice(notice: Notice) -> Self {
        Self {
            effect: None,
            notice: Some(notice),
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub const fn requested(&self) -> Option<&Request> {
        match &self.effect {
            Some(Effect::Request(request)) => Some(request),
            _ => None,
        }
    }
}
