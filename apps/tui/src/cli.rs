use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "smarterp-bi", version, about = "SmartERP BI console")]
pub struct CliArgs {
    /// Run without the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Print headless results as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the LLM API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the dashboard API base URL
    #[arg(long = "superset-api-url", value_name = "URL")]
    pub superset_api_url: Option<String>,

    /// Override the dashboard server URL used for embeds
    #[arg(long = "dashboard-server-url", value_name = "URL")]
    pub dashboard_server_url: Option<String>,

    /// Override the user id sent with generation requests
    #[arg(long = "user-id", value_name = "ID")]
    pub user_id: Option<i64>,

    /// Default model for every form (gemini or deepseek)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Override the log file used while the terminal UI runs
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot commands; any of them implies headless mode.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate SQL from a natural-language prompt
    Sql { prompt: String },
    /// Generate a dashboard through the LLM routes
    CreateDashboard { prompt: String },
    /// Generate a dashboard through the dashboard routes
    GenerateDashboard { prompt: String },
    /// Ask a question about the active dataset
    Explain { question: String },
    /// List dashboards on the dashboard server
    Dashboards,
    /// Show one dashboard and its embed URL
    Dashboard { id: i64 },
    /// Show the recorded query history
    History,
    /// Save the preferred model on the backend
    SetModel { model: String },
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("SMARTERP_API_BASE_URL", url);
        }
        if let Some(url) = &self.superset_api_url {
            std::env::set_var("SMARTERP_SUPERSET_API_URL", url);
        }
        if let Some(url) = &self.dashboard_server_url {
            std::env::set_var("SMARTERP_DASHBOARD_SERVER_URL", url);
        }
        if let Some(id) = self.user_id {
            std::env::set_var("SMARTERP_USER_ID", id.to_string());
        }
        if let Some(model) = &self.model {
            std::env::set_var("SMARTERP_MODEL", model);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("SMARTERP_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub const fn wants_headless(&self) -> bool {
        self.headless || self.command.is_some()
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcommand_implies_headless() {
        let args = CliArgs::parse_from(["smarterp-bi", "sql", "top 5 products by revenue"]);
        assert!(args.wants_headless());
        assert_eq!(
            args.command,
            Some(Command::Sql {
                prompt: "top 5 products by revenue".to_string()
            })
        );
    }

    #[test]
    fn bare_invocation_runs_the_terminal_ui() {
        let args = CliArgs::parse_from(["smarterp-bi", "--model", "deepseek"]);
        assert!(!args.wants_headless());
        assert_eq!(args.model.as_deref(), Some("deepseek"));
    }

    #[test]
    fn help_mentions_headless_commands() {
        let help = CliArgs::help_text();
        assert!(help.contains("dashboards"));
        assert!(help.contains("--json"));
    }
}
