//! Background task that runs admin API calls for the UI.
//!
//! Commands are handled one at a time in arrival order, so the UI never has
//! two calls in flight.

use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::api::client::SettingsClient;
use crate::settings::Settings;

/// Work requested by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    Fetch,
    Save { values: Map<String, Value> },
}

/// Outcome of a command. Errors are already reduced to the notice text.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    Fetched(Result<Settings, String>),
    Saved(Result<Map<String, Value>, String>),
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;
pub type ApiCommandReceiver = mpsc::Receiver<ApiCommand>;

/// Capacity of the UI → worker channel.
pub const COMMAND_CHANNEL_SIZE: usize = 8;

pub fn command_channel() -> (ApiCommandSender, ApiCommandReceiver) {
    mpsc::channel(COMMAND_CHANNEL_SIZE)
}

/// Process commands until every sender is dropped.
pub async fn run_worker<F>(client: SettingsClient, mut commands: ApiCommandReceiver, notify: F)
where
    F: Fn(ApiEvent) + Send,
{
    while let Some(command) = commands.recv().await {
        notify(execute(&client, command).await);
    }
    tracing::debug!("API worker stopped: command channel closed");
}

/// Run a single command, logging failures.
pub async fn execute(client: &SettingsClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::Fetch => ApiEvent::Fetched(client.fetch_settings().await.map_err(|err| {
            tracing::error!(error_type = err.error_type(), "Failed to fetch settings: {}", err);
            err.user_message()
        })),
        ApiCommand::Save { values } => {
            let result = client.update_settings(&values).await;
            match &result {
                Ok(saved) => tracing::info!(fields = saved.len(), "Settings updated"),
                Err(err) => tracing::error!(
                    error_type = err.error_type(),
                    "Failed to update settings: {}",
                    err
                ),
            }
            ApiEvent::Saved(result.map_err(|err| err.user_message()))
        }
    }
}
