use super::{decode_body, network_error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use smarterp_core::wire::{
    backend_routes, join_url, CreateDashboardBody, DashboardCreated, ErrorBody, ExplainDataBody,
    Explanation, GenerateSqlBody, QueryHistoryEntry, QueryHistoryPayload, SqlResponse,
    UpdatePreferenceBody,
};
use smarterp_core::{ApiError, ModelChoice};

/// Client for the LLM routes.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    user_id: i64,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, user_id: i64) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, user_id)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, user_id: i64) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            user_id,
        }
    }

    pub async fn generate_sql(
        &self,
        prompt: &str,
        model: ModelChoice,
    ) -> Result<SqlResponse, ApiError> {
        let body = GenerateSqlBody {
            prompt,
            model,
            user_id: self.user_id,
        };
        self.post(backend_routes::GENERATE_SQL, &body).await
    }

    pub async fn create_dashboard(
        &self,
        prompt: &str,
        model: ModelChoice,
    ) -> Result<DashboardCreated, ApiError> {
        let body = CreateDashboardBody {
            prompt,
            model,
            user_id: self.user_id,
        };
        self.post(backend_routes::CREATE_DASHBOARD, &body).await
    }

    /// The backend already knows the active dataset, so `data` is always null.
    pub async fn explain_data(
        &self,
        question: &str,
        model: ModelChoice,
    ) -> Result<Explanation, ApiError> {
        let body = ExplainDataBody {
            question,
            data: None,
            model,
        };
        self.post(backend_routes::EXPLAIN_DATA, &body).await
    }

    pub async fn query_history(&self) -> Result<Vec<QueryHistoryEntry>, ApiError> {
        let url = join_url(&self.base_url, backend_routes::QUERY_HISTORY);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        let payload: QueryHistoryPayload = decode_body(check_status(response).await?).await?;
        Ok(payload.into_entries())
    }

    pub async fn update_preference(&self, model: ModelChoice) -> Result<(), ApiError> {
        let url = join_url(&self.base_url, backend_routes::UPDATE_PREFERENCE);
        let response = self
            .client
            .post(&url)
            .json(&UpdatePreferenceBody { model })
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        check_status(response).await?;
        Ok(())
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = join_url(&self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| network_error(&e))?;
        decode_body(check_status(response).await?).await
    }
}

/// Reject non-success statuses with the server's `error` message, if it sent one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.error);

    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}
