//! Request and response bodies of the backend, plus the two route sets.
//!
//! The backend is reached through two client modules that grew apart: the
//! LLM routes (service A) and the dashboard-server routes (service B). They
//! share a host but not their paths or body shapes, and both are kept as they
//! are observed on the wire.

use crate::ModelChoice;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type DashboardId = i64;

/// Service A: LLM integration routes.
pub mod backend_routes {
    pub const GENERATE_SQL: &str = "/generate-sql";
    pub const CREATE_DASHBOARD: &str = "/generate_dashboard/";
    pub const EXPLAIN_DATA: &str = "/explain-data/";
    pub const QUERY_HISTORY: &str = "/query-history/";
    pub const UPDATE_PREFERENCE: &str = "/update-preference/";
}

/// Service B: dashboard-server routes.
pub mod superset_routes {
    use super::DashboardId;

    pub const DASHBOARDS: &str = "/dashboards/";
    pub const GENERATE_DASHBOARD: &str = "/generate_dashboard/";

    pub fn dashboard_detail(id: DashboardId) -> String {
        format!("/dashboards/{id}/")
    }
}

/// Join a base URL and a route without doubling the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// URL the dashboard server renders a dashboard at.
pub fn embed_url(dashboard_server: &str, id: DashboardId) -> String {
    join_url(dashboard_server, &format!("/dashboard/{id}/"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateSqlBody<'a> {
    pub prompt: &'a str,
    pub model: ModelChoice,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDashboardBody<'a> {
    pub prompt: &'a str,
    pub model: ModelChoice,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateDashboardBody<'a> {
    pub prompt: &'a str,
    pub llm: ModelChoice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainDataBody<'a> {
    pub question: &'a str,
    pub data: Option<Value>,
    pub model: ModelChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePreferenceBody {
    pub model: ModelChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlResponse {
    pub sql: String,
    #[serde(default)]
    pub execution_time_ms: Option<u64>,
    #[serde(default)]
    pub llm_provider: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardCreated {
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub dashboard_id: Option<DashboardId>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DashboardCreated {
    /// The returned URL, treating an empty string like a missing one.
    pub fn url(&self) -> Option<&str> {
        self.dashboard_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub answer: String,
    #[serde(default)]
    pub insights: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub id: DashboardId,
    pub dashboard_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardList {
    #[serde(default)]
    pub result: Vec<DashboardSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardDetail {
    pub dashboard_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardDetailEnvelope {
    #[serde(default)]
    pub result: Option<DashboardDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryHistoryEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub natural_language_query: Option<String>,
    #[serde(default)]
    pub generated_sql: Option<String>,
    #[serde(default)]
    pub llm_provider: Option<String>,
    #[serde(default)]
    pub execution_time_ms: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The history route is not pinned to one shape; accept the common ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QueryHistoryPayload {
    Bare(Vec<QueryHistoryEntry>),
    Results { results: Vec<QueryHistoryEntry> },
    Result { result: Vec<QueryHistoryEntry> },
}

impl QueryHistoryPayload {
    pub fn into_entries(self) -> Vec<QueryHistoryEntry> {
        match self {
            Self::Bare(entries)
            | Self::Results { results: entries }
            | Self::Result { result: entries } => entries,
        }
    }
}

/// Structured error body returned by service A.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
