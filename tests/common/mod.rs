//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use anysettings::api::SettingsClient;
use anysettings::config::{AuthConfig, SecureString, ServerConfig};
use anysettings::settings::Settings;
use anysettings::ui::app::App;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use mock_backend::MockBackend;

pub const TEST_KEY: &str = "sk-test-admin";

/// A response body covering every widget kind.
pub fn settings_body() -> Value {
    json!({
        "values": {
            "mode": "a",
            "tags": ["x"],
            "max_budget": 10
        },
        "schema": {
            "description": "Defaults for new internal users",
            "properties": {
                "enabled": { "type": "boolean", "description": "Allow sign-ups" },
                "mode": { "type": "string", "enum": ["a", "b"] },
                "tags": { "type": "array", "items": { "type": "string", "enum": ["x", "y", "z"] } },
                "max_budget": { "type": "number" },
                "team": { "type": "string" }
            }
        }
    })
}

pub fn sample_settings() -> Settings {
    serde_json::from_value(settings_body()).expect("fixture parses")
}

/// App that has already received `sample_settings()`.
pub fn loaded_app() -> App {
    let mut app = App::new(Duration::from_secs(4));
    app.on_api_event(anysettings::api::ApiEvent::Fetched(Ok(sample_settings())));
    app
}

pub fn client_for(backend: &MockBackend) -> SettingsClient {
    let server = ServerConfig {
        base_url: backend.base_url(),
        timeout_seconds: 2,
        ..ServerConfig::default()
    };
    SettingsClient::new(
        &server,
        &AuthConfig::default(),
        &SecureString::new(TEST_KEY.to_string()),
    )
    .expect("client builds")
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
