use super::{decode_body, network_error};
use smarterp_core::wire::{
    join_url, superset_routes, DashboardCreated, DashboardDetail, DashboardDetailEnvelope,
    DashboardId, DashboardList, DashboardSummary, GenerateDashboardBody,
};
use smarterp_core::{ApiError, ModelChoice};

pub const LIST_FAILED: &str = "Failed to fetch dashboards";
pub const DETAIL_FAILED: &str = "Failed to fetch dashboard detail";
pub const GENERATE_FAILED: &str = "Failed to generate dashboard";

/// Client for the dashboard-server routes. Error bodies are never read.
#[derive(Debug, Clone)]
pub struct SupersetClient {
    client: reqwest::Client,
    base_url: String,
}

impl SupersetClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_dashboards(&self) -> Result<Vec<DashboardSummary>, ApiError> {
        let list: DashboardList = self.get(superset_routes::DASHBOARDS, LIST_FAILED).await?;
        Ok(list.result)
    }

    pub async fn fetch_dashboard_detail(
        &self,
        id: DashboardId,
    ) -> Result<Option<DashboardDetail>, ApiError> {
        let envelope: DashboardDetailEnvelope = self
            .get(&superset_routes::dashboard_detail(id), DETAIL_FAILED)
            .await?;
        Ok(envelope.result)
    }

    pub async fn generate_dashboard(
        &self,
        prompt: &str,
        llm: ModelChoice,
    ) -> Result<DashboardCreated, ApiError> {
        let url = join_url(&self.base_url, superset_routes::GENERATE_DASHBOARD);
        let response = self
            .client
            .post(&url)
            .json(&GenerateDashboardBody { prompt, llm })
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        if !response.status().is_success() {
            return Err(ApiError::Rejected(GENERATE_FAILED.to_string()));
        }
        decode_body(response).await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        failure: &str,
    ) -> Result<T, ApiError> {
        let url = join_url(&self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        if !response.status().is_success() {
            return Err(ApiError::Rejected(failure.to_string()));
        }
        decode_body(response).await
    }
}
