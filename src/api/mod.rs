//! Admin API access: the HTTP client for the settings endpoints and the
//! worker task that runs it on behalf of the UI.

pub mod client;
pub mod error;
pub mod worker;

pub use client::SettingsClient;
pub use error::ApiError;
pub use worker::{command_channel, run_worker, ApiCommand, ApiCommandSender, ApiEvent};
