use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Admin API endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the proxy (e.g., "http://127.0.0.1:4000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the settings-fetch endpoint (GET).
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
    /// Path of the settings-update endpoint (PATCH).
    #[serde(default = "default_update_path")]
    pub update_path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where the admin credential comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Key stored directly in the config file.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable read when `api_key` is unset.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>,
    /// Header carrying `Bearer <key>` (default: "Authorization").
    #[serde(default = "default_header_name")]
    pub header_name: String,
}

/// Terminal UI behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notice stays in the footer.
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
    /// Event loop tick in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:4000".to_string()
}

fn default_settings_path() -> String {
    "/get/internal_user_settings".to_string()
}

fn default_update_path() -> String {
    "/update/internal_user_settings".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_api_key_env() -> Option<String> {
    Some("LITELLM_API_KEY".to_string())
}

fn default_header_name() -> String {
    "Authorization".to_string()
}

fn default_notice_seconds() -> u64 {
    4
}

fn default_tick_ms() -> u64 {
    250
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            settings_path: default_settings_path(),
            update_path: default_update_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            header_name: default_header_name(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_seconds: default_notice_seconds(),
            tick_ms: default_tick_ms(),
        }
    }
}
