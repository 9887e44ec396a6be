//! Authentication header building for admin API requests.

use super::credentials::SecureString;
use super::types::AuthConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the authentication header for a resolved key.
///
/// The value is always `Bearer <key>`; only the header name is configurable.
/// A key that already carries a `Bearer ` prefix is not prefixed twice.
pub fn build_auth_header(auth: &AuthConfig, key: &SecureString) -> AuthHeader {
    let raw = key.expose();
    let token = raw
        .strip_prefix("Bearer ")
        .or_else(|| raw.strip_prefix("bearer "))
        .unwrap_or(raw);
    (auth.header_name.clone(), format!("Bearer {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_authorization_header() {
        let auth = AuthConfig::default();
        let (name, value) = build_auth_header(&auth, &SecureString::new("sk-1234".into()));
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer sk-1234");
    }

    #[test]
    fn test_custom_header_name() {
        let auth = AuthConfig {
            header_name: "X-Proxy-Key".to_string(),
            ..AuthConfig::default()
        };
        let (name, value) = build_auth_header(&auth, &SecureString::new("sk-1234".into()));
        assert_eq!(name, "X-Proxy-Key");
        assert_eq!(value, "Bearer sk-1234");
    }

    #[test]
    fn test_existing_bearer_prefix_not_duplicated() {
        let auth = AuthConfig::default();
        let (_, value) = build_auth_header(&auth, &SecureString::new("Bearer sk-1".into()));
        assert_eq!(value, "Bearer sk-1");
    }
}
