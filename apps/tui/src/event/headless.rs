use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;
use serde::Serialize;
use smarterp_core::wire::{embed_url, DashboardCreated};
use smarterp_core::ModelChoice;

use crate::api::Clients;
use crate::cli::{CliArgs, Command};
use crate::config::AppConfig;

/// Run a single command without the UI and print its result to stdout.
pub async fn run_headless(
    config: &AppConfig,
    clients: &Clients,
    command: Option<Command>,
    json: bool,
) -> Result<()> {
    let Some(command) = command else {
        println!("{}", CliArgs::help_text());
        return Ok(());
    };
    let model = config.default_model;
    tracing::debug!(?command, %model, "running headless command");

    match command {
        Command::Sql { prompt } => {
            let response = clients
                .backend
                .generate_sql(require_text(&prompt, "prompt")?, model)
                .await?;
            if json {
                return print_json(&response);
            }
            println!("{}", response.sql);
            if let Some(ms) = response.execution_time_ms {
                let provider = response.llm_provider.as_deref().unwrap_or(model.as_str());
                println!("-- generated in {ms} ms by {provider}");
            }
        }
        Command::CreateDashboard { prompt } => {
            let created = clients
                .backend
                .create_dashboard(require_text(&prompt, "prompt")?, model)
                .await?;
            print_created(&created, json)?;
        }
        Command::GenerateDashboard { prompt } => {
            let created = clients
                .superset
                .generate_dashboard(require_text(&prompt, "prompt")?, model)
                .await?;
            print_created(&created, json)?;
        }
        Command::Explain { question } => {
            let explanation = clients
                .backend
                .explain_data(require_text(&question, "question")?, model)
                .await?;
            if json {
                return print_json(&explanation);
            }
            println!("{}", explanation.answer);
            let insights = explanation.insights.unwrap_or_default();
            if !insights.is_empty() {
                println!("\nKey insights:");
                for insight in insights {
                    println!("- {insight}");
                }
            }
        }
        Command::Dashboards => {
            let dashboards = clients.superset.fetch_dashboards().await?;
            if json {
                return print_json(&dashboards);
            }
            if dashboards.is_empty() {
                println!("No dashboards available");
            }
            for dashboard in dashboards {
                println!("{:>6}  {}", dashboard.id, dashboard.dashboard_title);
            }
        }
        Command::Dashboard { id } => {
            let detail = clients
                .superset
                .fetch_dashboard_detail(id)
                .await?
                .ok_or_else(|| eyre!("Dashboard {id} not found"))?;
            let url = embed_url(&config.dashboard_server_url, id);
            if json {
                return print_json(&HeadlessDashboard {
                    id,
                    dashboard_title: detail.dashboard_title,
                    url,
                });
            }
            println!("{}", detail.dashboard_title);
            println!("{url}");
        }
        Command::History => {
            let entries = clients.backend.query_history().await?;
            if json {
                return print_json(&entries);
            }
            if entries.is_empty() {
                println!("No queries recorded yet");
            }
            for entry in entries {
                println!(
                    "{} | {} | {}",
                    entry.created_at.as_deref().unwrap_or("-"),
                    entry.natural_language_query.as_deref().unwrap_or("-"),
                    entry.generated_sql.as_deref().unwrap_or("-"),
                );
            }
        }
        Command::SetModel { model } => {
            let choice = ModelChoice::parse(&model)
                .ok_or_else(|| eyre!("unknown model '{model}' (expected gemini or deepseek)"))?;
            clients.backend.update_preference(choice).await?;
            if json {
                return print_json(&HeadlessPreference { model: choice });
            }
            println!("Preferred model set to {}", choice.label());
        }
    }

    Ok(())
}

fn require_text<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        bail!("{what} must not be blank");
    }
    Ok(value)
}

fn print_created(created: &DashboardCreated, json: bool) -> Result<()> {
    if json {
        return print_json(created);
    }
    match created.url() {
        Some(url) => println!("Dashboard created: {url}"),
        None => println!(
            "{}",
            created.message.as_deref().unwrap_or("Dashboard created")
        ),
    }
    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
struct HeadlessDashboard {
    id: i64,
    dashboard_title: String,
    url: String,
}

#[derive(Serialize)]
struct HeadlessPreference {
    model: ModelChoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("  ", "prompt").is_err());
        assert_eq!(
            require_text("revenue by month", "prompt").ok(),
            Some("revenue by month")
        );
    }

    #[tokio::test]
    async fn blank_prompt_fails_before_any_request() {
        // Nothing listens on port 9; a request would surface a network error.
        let config = AppConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        };
        let clients = Clients::from_config(&config);
        let err = run_headless(
            &config,
            &clients,
            Some(Command::Sql {
                prompt: "   ".to_string(),
            }),
            false,
        )
        .await
        .expect_err("blank prompt rejected");
        assert!(err.to_string().contains("must not be blank"));
    }
}
