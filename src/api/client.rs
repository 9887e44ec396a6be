use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use tokio::time::timeout;

use crate::api::error::{extract_error_message, ApiError};
use crate::config::{build_auth_header, AuthConfig, AuthHeader, SecureString, ServerConfig};
use crate::settings::{Settings, UpdateResponse};

/// HTTP client for the settings endpoints of the admin API.
///
/// A client can only be built with a resolved key, so every request it sends
/// is authenticated.
pub struct SettingsClient {
    client: Client,
    settings_url: String,
    update_url: String,
    auth_header: AuthHeader,
    request_timeout: Duration,
}

impl SettingsClient {
    pub fn new(
        server: &ServerConfig,
        auth: &AuthConfig,
        key: &SecureString,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(server.connect_timeout_seconds as u64))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        let base_url = server.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            settings_url: format!("{}{}", base_url, server.settings_path),
            update_url: format!("{}{}", base_url, server.update_path),
            auth_header: build_auth_header(auth, key),
            request_timeout: Duration::from_secs(server.timeout_seconds as u64),
        })
    }

    /// `GET` the current values and their schema.
    pub async fn fetch_settings(&self) -> Result<Settings, ApiError> {
        tracing::debug!(url = %self.settings_url, "Fetching settings");
        let builder = self.client.get(&self.settings_url);
        self.send_json(builder, &self.settings_url).await
    }

    /// `PATCH` the edited values. Returns the values the server persisted.
    pub async fn update_settings(
        &self,
        values: &Map<String, Value>,
    ) -> Result<Map<String, Value>, ApiError> {
        tracing::debug!(url = %self.update_url, fields = values.len(), "Updating settings");
        let builder = self.client.patch(&self.update_url).json(values);
        let response: UpdateResponse = self.send_json(builder, &self.update_url).await?;
        Ok(response.settings)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let (name, value) = &self.auth_header;
        let builder = builder.header(name.as_str(), value.as_str());

        match timeout(self.request_timeout, self.do_send(builder, url)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::RequestTimeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::ConnectionError {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::ConnectionError {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            let mut message = extract_error_message(&body);
            if message.is_empty() {
                message = status.canonical_reason().unwrap_or("request failed").to_string();
            }
            return Err(ApiError::StatusError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::DecodeError {
            url: url.to_string(),
            source: e,
        })
    }
}
