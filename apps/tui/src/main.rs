use clap::Parser;
use color_eyre::Result;
use smarterp_bi_tui::api::Clients;
use smarterp_bi_tui::app::{App, AppActions};
use smarterp_bi_tui::cli::CliArgs;
use smarterp_bi_tui::config::init_app_config;
use smarterp_bi_tui::{event, logging, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Setup error handling
    color_eyre::install()?;

    let config = init_app_config()?;

    if args.wants_headless() || !is_terminal() {
        logging::init_stderr_tracing(config.debug)?;
        let clients = Clients::from_config(&config);
        return event::run_headless(&config, &clients, args.command, args.json).await;
    }

    logging::init_file_tracing(&config.log_file, config.debug)?;
    tracing::info!(
        api = %config.api_base_url,
        superset = %config.superset_api_url,
        model = %config.default_model,
        "starting terminal UI"
    );

    let (actions, mut outcomes) = AppActions::new(&config);
    let mut app = App::new(config);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app, &actions, &mut outcomes).await;
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
