//! Credential resolution from configuration.
//!
//! The admin key can come from the command line, the config file or an
//! environment variable, in that order.

use super::types::AuthConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Where a resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    CommandLine,
    ConfigFile,
    Environment,
}

/// Status of credential resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured {
        key: SecureString,
        source: CredentialSource,
    },
    /// No usable key anywhere.
    Missing {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl CredentialStatus {
    pub fn key(&self) -> Option<&SecureString> {
        match self {
            Self::Configured { key, .. } => Some(key),
            Self::Missing { .. } => None,
        }
    }

    pub fn into_key(self) -> Option<SecureString> {
        match self {
            Self::Configured { key, .. } => Some(key),
            Self::Missing { .. } => None,
        }
    }
}

impl AuthConfig {
    /// Resolve the key, reading the process environment.
    ///
    /// Called on demand and not cached.
    pub fn resolve_credential(&self, cli_key: Option<&str>) -> CredentialStatus {
        self.resolve_with(cli_key, |name| std::env::var(name).ok())
    }

    /// Resolve the key with an injectable environment lookup.
    pub fn resolve_with<F>(&self, cli_key: Option<&str>, env: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = non_empty(cli_key.map(str::to_string)) {
            return CredentialStatus::Configured {
                key: SecureString::new(key),
                source: CredentialSource::CommandLine,
            };
        }

        if let Some(key) = non_empty(self.api_key.clone()) {
            return CredentialStatus::Configured {
                key: SecureString::new(key),
                source: CredentialSource::ConfigFile,
            };
        }

        match self.api_key_env.as_deref() {
            Some(var) => match non_empty(env(var)) {
                Some(key) => CredentialStatus::Configured {
                    key: SecureString::new(key),
                    source: CredentialSource::Environment,
                },
                None => CredentialStatus::Missing {
                    reason: format!("no api_key configured and ${} is not set", var),
                },
            },
            None => CredentialStatus::Missing {
                reason: "no api_key configured".to_string(),
            },
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(api_key: Option<&str>) -> AuthConfig {
        AuthConfig {
            api_key: api_key.map(str::to_string),
            api_key_env: Some("TEST_ADMIN_KEY".to_string()),
            header_name: "Authorization".to_string(),
        }
    }

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("sk-1234".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("sk-1234"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("sk-1234"));

        assert_eq!(secret.expose(), "sk-1234");
    }

    #[test]
    fn test_cli_key_wins() {
        let status = auth(Some("from-file")).resolve_with(Some("from-cli"), |_| {
            Some("from-env".to_string())
        });
        assert_eq!(
            status,
            CredentialStatus::Configured {
                key: SecureString::new("from-cli".to_string()),
                source: CredentialSource::CommandLine,
            }
        );
    }

    #[test]
    fn test_config_key_before_env() {
        let status = auth(Some("from-file")).resolve_with(None, |_| Some("from-env".to_string()));
        assert_eq!(status.key().map(SecureString::expose), Some("from-file"));
    }

    #[test]
    fn test_env_fallback() {
        let status = auth(None).resolve_with(None, |name| {
            (name == "TEST_ADMIN_KEY").then(|| "from-env".to_string())
        });
        assert!(matches!(
            status,
            CredentialStatus::Configured {
                source: CredentialSource::Environment,
                ..
            }
        ));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let status = auth(Some("  ")).resolve_with(Some(""), |_| Some(String::new()));
        match status {
            CredentialStatus::Missing { reason } => assert!(reason.contains("TEST_ADMIN_KEY")),
            other => panic!("expected Missing, got {:?}", other),
        }
    }
}
