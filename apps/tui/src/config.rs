use dotenv::dotenv;
use smarterp_core::ModelChoice;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_SUPERSET_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_DASHBOARD_SERVER_URL: &str = "http://localhost:8088/superset";
pub const DEFAULT_USER_ID: i64 = 1;
pub const DEFAULT_LOG_FILE: &str = "smarterp-bi.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown model '{0}' (expected gemini or deepseek)")]
    InvalidModel(String),

    #[error("SMARTERP_USER_ID must be an integer, got '{0}'")]
    InvalidUserId(String),
}

/// Runtime settings, resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the LLM routes (SQL, dashboards, explanations, history).
    pub api_base_url: String,
    /// Base URL of the dashboard-server routes (list, detail, generate).
    pub superset_api_url: String,
    /// Where the dashboard server renders dashboards.
    pub dashboard_server_url: String,
    pub user_id: i64,
    pub default_model: ModelChoice,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            superset_api_url: DEFAULT_SUPERSET_API_URL.to_string(),
            dashboard_server_url: DEFAULT_DASHBOARD_SERVER_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            default_model: ModelChoice::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Build the config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let default_model = match get("SMARTERP_MODEL") {
            Some(value) => ModelChoice::parse(&value).ok_or(ConfigError::InvalidModel(value))?,
            None => defaults.default_model,
        };

        let user_id = match get("SMARTERP_USER_ID") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidUserId(value))?,
            None => defaults.user_id,
        };

        Ok(Self {
            api_base_url: get("SMARTERP_API_BASE_URL").unwrap_or(defaults.api_base_url),
            superset_api_url: get("SMARTERP_SUPERSET_API_URL").unwrap_or(defaults.superset_api_url),
            dashboard_server_url: get("SMARTERP_DASHBOARD_SERVER_URL")
                .unwrap_or(defaults.dashboard_server_url),
            user_id,
            default_model,
            log_file: get("SMARTERP_LOG_FILE").map_or(defaults.log_file, PathBuf::from),
            debug: get("DEBUG").is_some(),
        })
    }
}

/// Loads `.env` and resolves the configuration from the process environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_local_backend() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.dashboard_server_url, "http://localhost:8088/superset");
        assert_eq!(config.user_id, 1);
    }

    #[test]
    fn environment_overrides_each_setting() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SMARTERP_API_BASE_URL", "http://bi:9000/api"),
            ("SMARTERP_SUPERSET_API_URL", "http://bi:9001/api"),
            ("SMARTERP_DASHBOARD_SERVER_URL", "https://superset.example"),
            ("SMARTERP_USER_ID", "42"),
            ("SMARTERP_MODEL", "deepseek"),
            ("SMARTERP_LOG_FILE", "/tmp/bi.log"),
            ("DEBUG", "1"),
        ]))
        .expect("valid overrides");

        assert_eq!(config.api_base_url, "http://bi:9000/api");
        assert_eq!(config.superset_api_url, "http://bi:9001/api");
        assert_eq!(config.dashboard_server_url, "https://superset.example");
        assert_eq!(config.user_id, 42);
        assert_eq!(config.default_model, ModelChoice::Deepseek);
        assert_eq!(config.log_file, PathBuf::from("/tmp/bi.log"));
        assert!(config.debug);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("SMARTERP_API_BASE_URL", "  ")]))
            .expect("blank is unset");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("SMARTERP_MODEL", "gpt")])),
            Err(ConfigError::InvalidModel("gpt".to_string()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("SMARTERP_USER_ID", "abc")])),
            Err(ConfigError::InvalidUserId("abc".to_string()))
        );
    }
}
