use crate::api::Clients;
use crate::config::AppConfig;
use crate::terminal::clipboard;
use smarterp_core::{Effect, Notice, Outcome, Request};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Executes reducer effects. Requests run on the tokio runtime and report
/// back over a channel the event loop drains between frames.
#[derive(Debug, Clone)]
pub struct AppActions {
    clients: Clients,
    tx: UnboundedSender<Outcome>,
}

impl AppActions {
    pub fn new(config: &AppConfig) -> (Self, UnboundedReceiver<Outcome>) {
        Self::with_clients(Clients::from_config(config))
    }

    pub fn with_clients(clients: Clients) -> (Self, UnboundedReceiver<Outcome>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { clients, tx }, rx)
    }

    /// Run an effect. Local effects that fail come back as a notice.
    pub fn execute(&self, effect: Effect) -> Option<Notice> {
        match effect {
            Effect::Request(request) => {
                self.spawn_request(request);
                None
            }
            Effect::CopyToClipboard(text) => match clipboard::copy(&text) {
                Ok(()) => None,
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard write failed");
                    Some(Notice::error("Could not copy to clipboard"))
                }
            },
            Effect::OpenUrl(url) => match open::that(&url) {
                Ok(()) => None,
                Err(err) => {
                    tracing::warn!(%url, error = %err, "failed to open browser");
                    Some(Notice::warning(format!("Open {url} in your browser")))
                }
            },
        }
    }

    fn spawn_request(&self, request: Request) {
        let clients = self.clients.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = clients.perform(request).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("event loop gone, dropping outcome");
            }
        });
    }
}
