//! HTTP clients for the two backend route sets.
//!
//! [`BackendClient`] speaks to the LLM routes and surfaces the server's
//! `{"error": ...}` payload on failure. [`SupersetClient`] speaks to the
//! dashboard routes and only ever reports a generic per-operation failure.
//! Their paths and body shapes differ and are kept apart on purpose.

pub mod backend;
pub mod superset;

pub use backend::BackendClient;
pub use superset::SupersetClient;

use crate::config::AppConfig;
use serde::de::DeserializeOwned;
use smarterp_core::{ApiError, Outcome, Request};

/// Both clients behind a single dispatcher for page requests.
#[derive(Debug, Clone)]
pub struct Clients {
    pub backend: BackendClient,
    pub superset: SupersetClient,
}

impl Clients {
    pub fn from_config(config: &AppConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            backend: BackendClient::with_client(
                http.clone(),
                config.api_base_url.clone(),
                config.user_id,
            ),
            superset: SupersetClient::with_client(http, config.superset_api_url.clone()),
        }
    }

    /// Run one request to completion and wrap the result for its page.
    pub async fn perform(&self, request: Request) -> Outcome {
        tracing::debug!(request = request.name(), "sending request");

        let outcome = match request {
            Request::GenerateSql { prompt, model } => {
                Outcome::SqlGenerated(self.backend.generate_sql(&prompt, model).await)
            }
            Request::GenerateDashboard { form, prompt, llm } => Outcome::DashboardGenerated {
                form,
                result: self.superset.generate_dashboard(&prompt, llm).await,
            },
            Request::ExplainData { question, model } => {
                let result = self.backend.explain_data(&question, model).await;
                Outcome::DataExplained { question, result }
            }
            Request::ListDashboards => {
                Outcome::DashboardsListed(self.superset.fetch_dashboards().await)
            }
            Request::DashboardDetail { id } => Outcome::DashboardDetailLoaded {
                id,
                result: self.superset.fetch_dashboard_detail(id).await,
            },
            Request::QueryHistory => {
                Outcome::QueryHistoryLoaded(self.backend.query_history().await)
            }
            Request::UpdatePreference { model } => Outcome::PreferenceUpdated {
                model,
                result: self.backend.update_preference(model).await,
            },
        };

        if let Some(err) = outcome_error(&outcome) {
            tracing::warn!(error = %err, "request failed");
        }

        outcome
    }
}

fn outcome_error(outcome: &Outcome) -> Option<&ApiError> {
    match outcome {
        Outcome::SqlGenerated(Err(err))
        | Outcome::DashboardGenerated { result: Err(err), .. }
        | Outcome::DataExplained { result: Err(err), .. }
        | Outcome::DashboardsListed(Err(err))
        | Outcome::DashboardDetailLoaded { result: Err(err), .. }
        | Outcome::QueryHistoryLoaded(Err(err))
        | Outcome::PreferenceUpdated { result: Err(err), .. } => Some(err),
        _ => None,
    }
}

fn network_error(err: &reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Decode a success body, keeping transport and parse failures apart.
async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await.map_err(|e| network_error(&e))?;
    serde_json::from_slice(&bytes).map_err(ApiError::from)
}
