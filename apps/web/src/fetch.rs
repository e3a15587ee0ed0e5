//! Dashboard-server client over the browser fetch API. Same routes and error
//! rules as the terminal's client: non-success statuses become a generic
//! per-operation error and the body is never read.

use serde::de::DeserializeOwned;
use smarterp_core::wire::{
    join_url, superset_routes, DashboardCreated, DashboardDetail, DashboardDetailEnvelope,
    DashboardId, DashboardList, DashboardSummary, GenerateDashboardBody,
};
use smarterp_core::{ApiError, ModelChoice, Outcome, Request};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestInit, RequestMode, Response};

pub const LIST_FAILED: &str = "Failed to fetch dashboards";
pub const DETAIL_FAILED: &str = "Failed to fetch dashboard detail";
pub const GENERATE_FAILED: &str = "Failed to generate dashboard";

#[derive(Debug, Clone)]
pub struct SupersetFetch {
    base_url: String,
}

impl SupersetFetch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Run a page request. The browser shell only carries the dashboard-server
    /// routes, so anything else yields `None`.
    pub async fn perform(&self, request: Request) -> Option<Outcome> {
        Some(match request {
            Request::ListDashboards => Outcome::DashboardsListed(self.fetch_dashboards().await),
            Request::DashboardDetail { id } => Outcome::DashboardDetailLoaded {
                id,
                result: self.fetch_dashboard_detail(id).await,
            },
            Request::GenerateDashboard { form, prompt, llm } => Outcome::DashboardGenerated {
                form,
                result: self.generate_dashboard(&prompt, llm).await,
            },
            other => {
                web_sys::console::warn_1(
                    &format!("{} is not available in the browser", other.name()).into(),
                );
                return None;
            }
        })
    }

    pub async fn fetch_dashboards(&self) -> Result<Vec<DashboardSummary>, ApiError> {
        let list: DashboardList = self
            .send("GET", superset_routes::DASHBOARDS, None, LIST_FAILED)
            .await?;
        Ok(list.result)
    }

    pub async fn fetch_dashboard_detail(
        &self,
        id: DashboardId,
    ) -> Result<Option<DashboardDetail>, ApiError> {
        let envelope: DashboardDetailEnvelope = self
            .send(
                "GET",
                &superset_routes::dashboard_detail(id),
                None,
                DETAIL_FAILED,
            )
            .await?;
        Ok(envelope.result)
    }

    pub async fn generate_dashboard(
        &self,
        prompt: &str,
        llm: ModelChoice,
    ) -> Result<DashboardCreated, ApiError> {
        let body = serde_json::to_string(&GenerateDashboardBody { prompt, llm })?;
        self.send(
            "POST",
            superset_routes::GENERATE_DASHBOARD,
            Some(body),
            GENERATE_FAILED,
        )
        .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        failure: &str,
    ) -> Result<T, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let url = join_url(&self.base_url, path);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = web_sys::Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(network_error)?;
        }

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let response: Response = value.dyn_into().map_err(network_error)?;

        if !response.ok() {
            return Err(ApiError::Rejected(failure.to_string()));
        }

        let json = JsFuture::from(response.json().map_err(decode_error)?)
            .await
            .map_err(decode_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[allow(clippy::needless_pass_by_value)]
fn network_error(value: JsValue) -> ApiError {
    ApiError::Network(describe(&value))
}

#[allow(clippy::needless_pass_by_value)]
fn decode_error(value: JsValue) -> ApiError {
    ApiError::Decode(describe(&value))
}
